use rand::{rngs::OsRng, Rng};

use crate::domain::entities::session::{OTP_MAX, OTP_MIN};

use super::traits::CodeGenerator;

/// Uniform code in `100000..=999999` drawn from the operating system CSPRNG
#[derive(Debug, Default, Clone, Copy)]
pub struct SecureCodeGenerator;

impl CodeGenerator for SecureCodeGenerator {
    fn generate(&self) -> String {
        OsRng.gen_range(OTP_MIN..=OTP_MAX).to_string()
    }
}

/// Always returns the same code. For tests and local demos.
#[derive(Debug, Clone)]
pub struct FixedCodeGenerator(pub String);

impl FixedCodeGenerator {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }
}

impl CodeGenerator for FixedCodeGenerator {
    fn generate(&self) -> String {
        self.0.clone()
    }
}
