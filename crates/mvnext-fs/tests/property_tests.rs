use mvnext_fs::NormalizedPath;
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_normalization_invariants(s in "\\PC*") {
        let path = NormalizedPath::new(&s);
        let as_str = path.as_str();

        prop_assert!(!as_str.contains('\\'));
        prop_assert!(!as_str.contains("//"));
        prop_assert!(!as_str.is_empty());

        // Normalizing twice changes nothing
        let again = NormalizedPath::new(as_str);
        prop_assert_eq!(&again, &path);
    }

    #[test]
    fn test_join_then_relative_to(
        base in "[a-z]{1,8}(/[a-z]{1,8}){0,3}",
        rel in "[a-z.]{0,3}[a-z]{1,8}(/[a-z]{1,8}){0,3}",
    ) {
        let base = NormalizedPath::new(&base);
        let joined = base.join(&rel);
        prop_assert_eq!(joined.relative_to(&base), Some(NormalizedPath::new(&rel)));
    }
}
