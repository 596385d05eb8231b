/// Non-fatal outcomes of a deletion. The list is left untouched in both cases.
#[derive(Debug, Clone, Copy, Eq, PartialEq, thiserror::Error)]
pub enum ListNotice {
    #[error("linked list is empty")]
    EmptyList,

    #[error("data is not found")]
    NotFound,
}


#[cfg(test)]
mod tests {
    use super::ListNotice;

    #[test]
    fn test_messages() {
        assert_eq!(ListNotice::EmptyList.to_string(), "linked list is empty");
        assert_eq!(ListNotice::NotFound.to_string(), "data is not found");
    }
}
