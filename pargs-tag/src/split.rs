/// Iterator over the pieces of a string separated by a single ASCII byte.
///
/// Behaves like [`str::split`] with a `char` pattern: an empty input yields a
/// single empty piece, and adjacent delimiters yield empty pieces between
/// them.
#[derive(Debug, Clone)]
pub struct Split<'a> {
    rest: Option<&'a str>,
    delimiter: u8,
}

impl<'a> Split<'a> {
    /// `delimiter` must be ASCII, so that every split lands on a char
    /// boundary.
    #[inline]
    pub fn new(input: &'a str, delimiter: u8) -> Self {
        debug_assert!(delimiter.is_ascii());

        Self {
            rest: Some(input),
            delimiter,
        }
    }
}

impl<'a> Iterator for Split<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = self.rest?;

        Some(match memchr::memchr(self.delimiter, rest.as_bytes()) {
            Some(i) => {
                self.rest = Some(&rest[i + 1..]);
                &rest[..i]
            }
            None => {
                self.rest = None;
                rest
            }
        })
    }
}
