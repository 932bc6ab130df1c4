use crate::error::Error;
use crate::value::{Object, Value};
use crate::Result;

/// One unit of intermediate parse state.
///
/// A slice tokenizer reduces everything it can resolve with local context;
/// what remains is a stack of these, later composed across slices by
/// [`PartStack::merge`].
#[derive(Debug)]
pub(crate) enum Part {
    /// A completed value awaiting placement.
    Value(Value),
    /// A string key consumed by a `:`, awaiting its value.
    DeclareMember(String),
    /// A completed key/value pair awaiting insertion into its object.
    Member(String, Value),
    ObjectBegin,
    ArrayBegin,
    /// A `}` whose opener lies in an earlier slice, carrying the members
    /// gathered to the right of the closer.
    OpenObjectEnd(Object),
    /// A `]` whose opener lies in an earlier slice. Elements stay in
    /// reverse order until the opener is found.
    OpenArrayEnd(Vec<Value>),
}

/// The parts stack for one slice, owned exclusively by its tokenizer task
/// until handed to a merge.
#[derive(Debug, Default)]
pub(crate) struct PartStack {
    parts: Vec<Part>,
}

impl PartStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, part: Part) {
        self.parts.push(part);
    }

    /// Form-member-or-insert: a freshly completed value folds into a
    /// pending `DeclareMember` instead of being pushed bare. This is how
    /// key/value pairing happens without a grammar production for it.
    pub fn push_value(&mut self, value: Value) {
        match self.parts.pop() {
            Some(Part::DeclareMember(name)) => self.parts.push(Part::Member(name, value)),
            Some(other) => {
                self.parts.push(other);
                self.parts.push(Part::Value(value));
            }
            None => self.parts.push(Part::Value(value)),
        }
    }

    /// `:` converts the string value immediately before it into a declared
    /// member name.
    pub fn declare_member(&mut self) -> Result<()> {
        match self.parts.pop() {
            Some(Part::Value(Value::String(name))) => {
                self.parts.push(Part::DeclareMember(name));
                Ok(())
            }
            _ => Err(Error::UnexpectedColon),
        }
    }

    /// Local close reduction for `}`: pop members into `object` until the
    /// matching `ObjectBegin`. With no opener in this stack the partially
    /// built object is carried as an open end for a later merge to resolve.
    pub fn end_object(&mut self, mut object: Object) -> Result<()> {
        loop {
            match self.parts.pop() {
                None => {
                    self.parts.push(Part::OpenObjectEnd(object));
                    return Ok(());
                }
                Some(Part::ObjectBegin) => {
                    self.push_value(Value::Object(object));
                    return Ok(());
                }
                Some(Part::Member(name, value)) => {
                    // Members pop right to left, so the occurrence already
                    // present is the later one in the source; it wins.
                    object.entry(name).or_insert(value);
                }
                Some(open @ (Part::OpenObjectEnd(_) | Part::OpenArrayEnd(_))) => {
                    self.parts.push(open);
                    self.parts.push(Part::OpenObjectEnd(object));
                    return Ok(());
                }
                Some(_) => return Err(Error::NonMemberInObject),
            }
        }
    }

    /// Local close reduction for `]`: elements accumulate in pop order and
    /// are reversed once the opener is found.
    pub fn end_array(&mut self, mut array: Vec<Value>) -> Result<()> {
        loop {
            match self.parts.pop() {
                None => {
                    self.parts.push(Part::OpenArrayEnd(array));
                    return Ok(());
                }
                Some(Part::ArrayBegin) => {
                    array.reverse();
                    self.push_value(Value::Array(array));
                    return Ok(());
                }
                Some(Part::Value(value)) => array.push(value),
                Some(open @ (Part::OpenObjectEnd(_) | Part::OpenArrayEnd(_))) => {
                    self.parts.push(open);
                    self.parts.push(Part::OpenArrayEnd(array));
                    return Ok(());
                }
                Some(_) => return Err(Error::NonElementInArray),
            }
        }
    }

    /// Merge the stack produced by the slice immediately to the right.
    ///
    /// Open ends get a second chance to find their opener now that this
    /// stack's tail is visible; completed values go through the ordinary
    /// form-member-or-insert rule; everything else appends. `other` is
    /// consumed — both inputs are reduced into one owned stack.
    pub fn merge(&mut self, other: PartStack) -> Result<()> {
        for part in other.parts {
            match part {
                Part::OpenObjectEnd(object) => self.end_object(object)?,
                Part::OpenArrayEnd(array) => self.end_array(array)?,
                Part::Value(value) => self.push_value(value),
                part => self.parts.push(part),
            }
        }
        Ok(())
    }

    /// A finished parse is exactly one completed value; anything else is
    /// trailing garbage, an unclosed container, or an empty document.
    pub fn into_value(mut self) -> Result<Value> {
        if self.parts.len() != 1 {
            return Err(Error::IncompleteJson);
        }
        match self.parts.pop() {
            Some(Part::Value(value)) => Ok(value),
            _ => Err(Error::IncompleteJson),
        }
    }

    #[cfg(test)]
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(value: i64) -> Value {
        Value::from(value)
    }

    #[rstest::rstest]
    fn test_form_member_or_insert() {
        let mut stack = PartStack::new();
        stack.push_value(Value::from("key"));
        stack.declare_member().unwrap();
        stack.push_value(int(7));
        match stack.parts() {
            [Part::Member(name, value)] => {
                assert_eq!(name, "key");
                assert_eq!(*value, int(7));
            }
            parts => panic!("unexpected stack: {parts:?}"),
        }
    }

    #[rstest::rstest]
    fn test_declare_member_requires_string() {
        let mut stack = PartStack::new();
        stack.push_value(int(1));
        assert_eq!(stack.declare_member(), Err(Error::UnexpectedColon));

        let mut stack = PartStack::new();
        assert_eq!(stack.declare_member(), Err(Error::UnexpectedColon));
    }

    #[rstest::rstest]
    fn test_close_reduction_resolves_local_opener() {
        let mut stack = PartStack::new();
        stack.push(Part::ArrayBegin);
        stack.push_value(int(1));
        stack.push_value(int(2));
        stack.end_array(Vec::new()).unwrap();
        let value = stack.into_value().unwrap();
        assert_eq!(value, Value::Array(vec![int(1), int(2)]));
    }

    #[rstest::rstest]
    fn test_close_without_opener_becomes_open_end() {
        // Tokenizing the fragment `1,2]` leaves an open array end with the
        // elements reversed.
        let mut stack = PartStack::new();
        stack.push_value(int(1));
        stack.push_value(int(2));
        stack.end_array(Vec::new()).unwrap();
        match stack.parts() {
            [Part::OpenArrayEnd(items)] => assert_eq!(items, &[int(2), int(1)]),
            parts => panic!("unexpected stack: {parts:?}"),
        }
    }

    #[rstest::rstest]
    fn test_merge_resolves_open_end_against_left_opener() {
        // Left slice: `[1,`  Right slice: `2]`
        let mut left = PartStack::new();
        left.push(Part::ArrayBegin);
        left.push_value(int(1));

        let mut right = PartStack::new();
        right.push_value(int(2));
        right.end_array(Vec::new()).unwrap();

        left.merge(right).unwrap();
        assert_eq!(left.into_value().unwrap(), Value::Array(vec![int(1), int(2)]));
    }

    #[rstest::rstest]
    fn test_merge_folds_member_into_left_declare() {
        // Left slice ends in a declared member whose value closes an object
        // contributed by the right slice: `{"a": {"b": 1,` / `"c": 2}}`
        let mut left = PartStack::new();
        left.push(Part::ObjectBegin);
        left.push_value(Value::from("a"));
        left.declare_member().unwrap();
        left.push(Part::ObjectBegin);
        left.push_value(Value::from("b"));
        left.declare_member().unwrap();
        left.push_value(int(1));

        let mut right = PartStack::new();
        right.push_value(Value::from("c"));
        right.declare_member().unwrap();
        right.push_value(int(2));
        right.end_object(Object::new()).unwrap();
        right.end_object(Object::new()).unwrap();

        left.merge(right).unwrap();
        let value = left.into_value().unwrap();
        assert_eq!(value["a"]["b"], int(1));
        assert_eq!(value["a"]["c"], int(2));
    }

    #[rstest::rstest]
    fn test_duplicate_member_last_write_wins() {
        let mut stack = PartStack::new();
        stack.push(Part::ObjectBegin);
        stack.push(Part::Member("a".to_string(), int(1)));
        stack.push(Part::Member("a".to_string(), int(2)));
        stack.end_object(Object::new()).unwrap();
        let value = stack.into_value().unwrap();
        assert_eq!(value["a"], int(2));
    }

    #[rstest::rstest]
    fn test_mismatched_close_is_structural_error() {
        let mut stack = PartStack::new();
        stack.push(Part::ArrayBegin);
        stack.push_value(int(1));
        assert_eq!(stack.end_object(Object::new()), Err(Error::NonMemberInObject));

        let mut stack = PartStack::new();
        stack.push(Part::ObjectBegin);
        stack.push(Part::Member("a".to_string(), int(1)));
        assert_eq!(stack.end_array(Vec::new()), Err(Error::NonElementInArray));
    }

    #[rstest::rstest]
    fn test_stacked_open_ends_stay_in_order() {
        // Fragment `]}` produces two open ends; a later close on top of an
        // open end must not consume it.
        let mut stack = PartStack::new();
        stack.end_array(Vec::new()).unwrap();
        stack.end_object(Object::new()).unwrap();
        match stack.parts() {
            [Part::OpenArrayEnd(_), Part::OpenObjectEnd(_)] => {}
            parts => panic!("unexpected stack: {parts:?}"),
        }
    }

    #[rstest::rstest]
    fn test_into_value_rejects_leftovers() {
        let mut stack = PartStack::new();
        stack.push_value(int(1));
        stack.push_value(int(2));
        assert_eq!(stack.into_value(), Err(Error::IncompleteJson));

        let stack = PartStack::new();
        assert_eq!(stack.into_value(), Err(Error::IncompleteJson));

        let mut stack = PartStack::new();
        stack.push(Part::ObjectBegin);
        assert_eq!(stack.into_value(), Err(Error::IncompleteJson));
    }
}
