/// Editable text buffer. The cursor always sits at the end.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextField {
    value: String,
}

impl TextField {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn insert(&mut self, ch: char) {
        self.value.push(ch);
    }

    pub fn backspace(&mut self) {
        self.value.pop();
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edits_at_end() {
        let mut field = TextField::default();
        for ch in "héllo".chars() {
            field.insert(ch);
        }
        field.backspace();
        assert_eq!(field.value(), "héll");
        field.set("new");
        assert_eq!(field.value(), "new");
    }

    #[test]
    fn backspace_on_empty_is_noop() {
        let mut field = TextField::default();
        field.backspace();
        assert!(field.is_empty());
    }
}
