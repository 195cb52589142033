mod brevo_tests;
