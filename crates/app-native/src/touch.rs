/// Follows the first finger down; other fingers neither press nor release.
#[derive(Clone, Copy, Debug, Default)]
pub struct PrimaryTouch {
    id: Option<u64>,
}

impl PrimaryTouch {
    /// True when `id` becomes the primary finger.
    pub fn start(&mut self, id: u64) -> bool {
        if self.id.is_some() {
            return false;
        }
        self.id = Some(id);
        true
    }

    pub fn is_primary(&self, id: u64) -> bool {
        self.id == Some(id)
    }

    /// True when the primary finger lifted; the next finger down takes over.
    pub fn end(&mut self, id: u64) -> bool {
        if !self.is_primary(id) {
            return false;
        }
        self.id = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_finger_is_ignored() {
        let mut touch = PrimaryTouch::default();
        assert!(touch.start(3));
        assert!(!touch.start(7));
        assert!(!touch.end(7));
        assert!(touch.is_primary(3));
        assert!(touch.end(3));
    }

    #[test]
    fn next_finger_takes_over_after_lift() {
        let mut touch = PrimaryTouch::default();
        assert!(touch.start(1));
        assert!(touch.end(1));
        assert!(!touch.end(1));
        assert!(touch.start(2));
        assert!(touch.is_primary(2));
    }
}
