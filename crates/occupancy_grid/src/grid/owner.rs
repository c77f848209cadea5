//! Ownership classification of a single cell.

/// Which entities claim a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellOwner<K> {
    /// No entity occupies the cell (or the cell is outside the grid).
    Unowned,
    /// Two or more entities occupy the cell.
    Contested,
    /// Exactly one entity occupies the cell.
    Owned(K),
}

impl<K> CellOwner<K> {
    pub fn is_unowned(&self) -> bool {
        matches!(self, CellOwner::Unowned)
    }

    pub fn is_contested(&self) -> bool {
        matches!(self, CellOwner::Contested)
    }

    /// The single owner, if there is exactly one.
    pub fn owner(&self) -> Option<&K> {
        match self {
            CellOwner::Owned(id) => Some(id),
            _ => None,
        }
    }

    pub fn into_owner(self) -> Option<K> {
        match self {
            CellOwner::Owned(id) => Some(id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let owned = CellOwner::Owned("crate");
        assert_eq!(owned.owner(), Some(&"crate"));
        assert!(!owned.is_unowned());
        assert_eq!(owned.into_owner(), Some("crate"));

        let free: CellOwner<u32> = CellOwner::Unowned;
        assert!(free.is_unowned());
        assert_eq!(free.owner(), None);

        let shared: CellOwner<u32> = CellOwner::Contested;
        assert!(shared.is_contested());
        assert_eq!(shared.into_owner(), None);
    }
}
