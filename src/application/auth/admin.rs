pub trait AdminVerifier: Send + Sync {
    fn verify_admin_secret(&self, input: &str) -> bool;
}

/// One password shared by every admin, compared as-is.
pub struct SharedSecret {
    secret: String,
}

impl SharedSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl AdminVerifier for SharedSecret {
    fn verify_admin_secret(&self, input: &str) -> bool {
        input == self.secret
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_only() {
        let verifier = SharedSecret::new("hunter2");
        assert!(verifier.verify_admin_secret("hunter2"));
        assert!(!verifier.verify_admin_secret("Hunter2"));
        assert!(!verifier.verify_admin_secret(" hunter2"));
        assert!(!verifier.verify_admin_secret(""));
    }
}
