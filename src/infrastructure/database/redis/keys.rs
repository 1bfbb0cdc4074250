/// Key layout for one namespace:
/// `<prefix>:collections` holds every collection id, and
/// `<prefix>:collection:<id>:words` holds that collection's word set.
#[derive(Clone, Debug)]
pub struct KeySpace {
    prefix: String,
}

impl KeySpace {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn index(&self) -> String {
        format!("{}:collections", self.prefix)
    }

    pub fn words(&self, name: &str) -> String {
        format!("{}:collection:{}:words", self.prefix, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_namespaced() {
        let keys = KeySpace::new("skribbl");
        assert_eq!(keys.index(), "skribbl:collections");
        assert_eq!(
            keys.words("video games"),
            "skribbl:collection:video games:words"
        );
    }

    #[test]
    fn prefixes_do_not_collide() {
        let a = KeySpace::new("a");
        let b = KeySpace::new("b");
        assert_ne!(a.index(), b.index());
        assert_ne!(a.words("x"), b.words("x"));
    }
}
