/// Alias for a vector of Edit
/// Result of the Myers diff function, i.e. the edit script
pub type Script = Vec<Edit>;

/// Each element in an edit script refers to lines by their 0-based index:
/// present in both sequences (Equal, old index then new index)
/// removed from the old sequence (Delete)
/// added from the new sequence (Insert)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edit {
    Equal(usize, usize),
    Delete(usize),
    Insert(usize),
}

impl Edit {
    pub fn is_change(&self) -> bool {
        !matches!(self, Edit::Equal(..))
    }
}
