use elective::{config::Config, context::Context, structures::scope::Scope};

mod moods {
    use super::*;

    #[test]
    fn barbara() {
        let mut the_context = Context::from_config(Config::default());
        let scope = Scope::try_from("xyz").unwrap();

        let all_y_are_x = the_context.equation("y = xy", &scope).unwrap();
        let all_z_are_y = the_context.equation("z = yz", &scope).unwrap();

        let premises = the_context.conjoin(all_y_are_x, all_z_are_y).unwrap();
        let conclusion = the_context.eliminate(premises, 'y').unwrap();

        // All Zs are Xs.
        assert_eq!(conclusion.to_string(), "(1-x)z = 0");
        assert_eq!(conclusion.scope().to_string(), "xz");

        assert_eq!(the_context.counters.normalizations, 2);
        assert_eq!(the_context.counters.conjunctions, 1);
        assert_eq!(the_context.counters.eliminations, 1);
    }

    #[test]
    fn celarent() {
        let mut the_context = Context::from_config(Config::default());
        let scope = Scope::try_from("xyz").unwrap();

        let no_y_is_x = the_context.equation("xy = 0", &scope).unwrap();
        let all_z_are_y = the_context.equation("z = yz", &scope).unwrap();

        let premises = the_context.conjoin(no_y_is_x, all_z_are_y).unwrap();
        let conclusion = the_context.eliminate(premises, 'y').unwrap();

        // No Z is X.
        assert_eq!(conclusion.to_string(), "xz = 0");
    }

    #[test]
    fn premises_without_a_conclusion() {
        let mut the_context = Context::from_config(Config::default());
        let scope = Scope::try_from("xyz").unwrap();

        let all_y_are_x = the_context.equation("y = xy", &scope).unwrap();
        let no_y_is_z = the_context.equation("yz = 0", &scope).unwrap();

        let premises = the_context.conjoin(all_y_are_x, no_y_is_z).unwrap();
        let conclusion = the_context.eliminate(premises, 'y').unwrap();

        assert!(conclusion.is_vacuous());
        assert_eq!(conclusion.to_string(), "0 = 0");
    }

    #[test]
    fn an_existential_premise_through_an_auxiliary_symbol() {
        let mut the_context = Context::from_config(Config::default());

        // v is the auxiliary symbol carrying the existential import.
        let scope = Scope::try_from("xyzv").unwrap();

        let some_y_is_x = the_context.equation("y = vx", &scope).unwrap();
        let no_y_is_z = the_context.equation("yz = 0", &scope).unwrap();
        let auxiliary_within_x = the_context.equation("v(1-x) = 0", &scope).unwrap();

        let premises = the_context.conjoin(some_y_is_x, no_y_is_z).unwrap();
        let premises = the_context.conjoin(premises, auxiliary_within_x).unwrap();

        let conclusion = the_context.eliminate(premises, 'y').unwrap();

        assert_eq!(
            conclusion.to_string(),
            "(1-x)(1-z)v + (1-x)zv + xzv = 0"
        );
    }
}
