use crate::toolbar::{Document, Part};

pub struct DocumentAssertion<'a> {
    pub(crate) doc: &'a Document,
}

impl<'a> DocumentAssertion<'a> {
    /// Assert the number of parts
    pub fn part_count(self, expected: usize) -> Self {
        let actual = self.doc.parts.len();
        assert_eq!(
            actual, expected,
            "Expected {} parts, found {}:\n{}",
            expected, actual, self.doc
        );
        self
    }

    /// Assert on a specific part by index
    pub fn part<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(PartAssertion<'a>),
    {
        assert!(
            index < self.doc.parts.len(),
            "Part index {} out of bounds (document has {} parts):\n{}",
            index,
            self.doc.parts.len(),
            self.doc
        );
        assertion(PartAssertion {
            part: &self.doc.parts[index],
            context: format!("parts[{}]", index),
        });
        self
    }

    /// Assert the unquoted name (first arg of the first part)
    pub fn name(self, expected: &str) -> Self {
        let actual = self.doc.part0_arg0().map(|tok| tok.unquoted());
        assert_eq!(
            actual.as_deref(),
            Some(expected),
            "Expected name {:?}:\n{}",
            expected,
            self.doc
        );
        self
    }

    /// Assert that the document has no name
    pub fn no_name(self) -> Self {
        assert!(
            self.doc.part0_arg0().is_none(),
            "Expected no name:\n{}",
            self.doc
        );
        self
    }
}

pub struct PartAssertion<'a> {
    pub(crate) part: &'a Part,
    pub(crate) context: String,
}

impl<'a> PartAssertion<'a> {
    /// Assert the byte span of the part (separators excluded)
    pub fn span(self, start: usize, end: usize) -> Self {
        assert_eq!(
            (self.part.start(), self.part.end()),
            (start, end),
            "{}: Expected span {}..{}, found {}..{}",
            self.context,
            start,
            end,
            self.part.start(),
            self.part.end()
        );
        self
    }

    /// Assert the raw text of the part
    pub fn text(self, expected: &str) -> Self {
        assert_eq!(
            self.part.text(),
            expected,
            "{}: Expected text {:?}, found {:?}",
            self.context,
            expected,
            self.part.text()
        );
        self
    }

    /// Assert the number of args
    pub fn arg_count(self, expected: usize) -> Self {
        let actual = self.part.args.len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} args, found {}: {:?}",
            self.context,
            expected,
            actual,
            self.part.args_strs()
        );
        self
    }

    /// Assert the raw text of every arg, in order
    pub fn args(self, expected: &[&str]) -> Self {
        assert_eq!(
            self.part.args_strs(),
            expected,
            "{}: args differ",
            self.context
        );
        self
    }

    /// Assert the text and byte span of one arg
    pub fn arg(self, index: usize, text: &str, start: usize, end: usize) -> Self {
        let context = format!("{}.args[{}]", self.context, index);
        let arg = self.part.args.get(index).unwrap_or_else(|| {
            panic!(
                "{}: out of bounds (part has {} args: {:?})",
                context,
                self.part.args.len(),
                self.part.args_strs()
            )
        });
        assert_eq!(
            arg.text, text,
            "{}: Expected text {:?}, found {:?}",
            context, text, arg.text
        );
        assert_eq!(
            (arg.start, arg.end),
            (start, end),
            "{}: Expected span {}..{}, found {}..{}",
            context,
            start,
            end,
            arg.start,
            arg.end
        );
        self
    }

    /// Assert the unquoted value of one arg
    pub fn arg_unquoted(self, index: usize, expected: &str) -> Self {
        let actual = self.part.args.get(index).map(|arg| arg.unquoted());
        assert_eq!(
            actual.as_deref(),
            Some(expected),
            "{}.args[{}]: Expected unquoted {:?}",
            self.context,
            index,
            expected
        );
        self
    }
}
