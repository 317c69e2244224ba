use crate::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ExpectedLiteralValue {
    Null,
    True,
    False,
}

impl From<ExpectedLiteralValue> for Value {
    fn from(lit: ExpectedLiteralValue) -> Self {
        match lit {
            ExpectedLiteralValue::Null => Value::Null,
            ExpectedLiteralValue::True => Value::Boolean(true),
            ExpectedLiteralValue::False => Value::Boolean(false),
        }
    }
}

/// What happened after feeding one more byte into the literal matcher?
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Step {
    /// Byte matched, but the literal is not finished yet.
    NeedMore,
    /// Byte matched *and* it was the last byte of the literal.
    Done(ExpectedLiteralValue),
    /// Byte did **not** match the expected byte.
    Reject,
}

/// `None`  ➜  no literal is being matched
/// `Some`  ➜  `(remaining_bytes, literal_kind)` while matching
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct ExpectedLiteralBuffer(Option<(&'static [u8], ExpectedLiteralValue)>);

impl ExpectedLiteralBuffer {
    /// Start matching after the *first* byte (`n`, `t`, or `f`)
    pub(crate) fn new(first: u8) -> Self {
        match first {
            b'n' => ExpectedLiteralBuffer(Some((b"ull", ExpectedLiteralValue::Null))),
            b't' => ExpectedLiteralBuffer(Some((b"rue", ExpectedLiteralValue::True))),
            b'f' => ExpectedLiteralBuffer(Some((b"alse", ExpectedLiteralValue::False))),
            _ => ExpectedLiteralBuffer(None),
        }
    }

    /// Give the matcher the next input byte and learn what to do next.
    pub(crate) fn step(&mut self, b: u8) -> Step {
        let Some((bytes, kind)) = self.0.take() else {
            return Step::Reject;
        };

        match bytes.split_first() {
            Some((&expected, rest)) if expected == b => {
                if rest.is_empty() {
                    Step::Done(kind)
                } else {
                    self.0 = Some((rest, kind));
                    Step::NeedMore
                }
            }
            _ => {
                // Mismatch: keep the state we took at the top
                self.0 = Some((bytes, kind));
                Step::Reject
            }
        }
    }
}
