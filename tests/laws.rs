use elective::{
    config::Config,
    context::Context,
    structures::{equation::Equation, scope::Scope},
};

fn premises(the_context: &mut Context, scope: &Scope) -> (Equation, Equation, Equation) {
    let a = the_context.equation("y = xy", scope).unwrap();
    let b = the_context.equation("xz = 0", scope).unwrap();
    let c = the_context.equation("z = yz", scope).unwrap();
    (a, b, c)
}

mod conjunction {
    use super::*;
    use elective::types::err::{self, ErrorKind};

    #[test]
    fn commutative() {
        let mut the_context = Context::from_config(Config::default());
        let scope = Scope::try_from("xyz").unwrap();
        let (a, b, _) = premises(&mut the_context, &scope);

        let a_b = the_context.conjoin(a.clone(), b.clone()).unwrap();
        let b_a = the_context.conjoin(b, a).unwrap();

        assert_eq!(a_b, b_a);
    }

    #[test]
    fn idempotent() {
        let mut the_context = Context::from_config(Config::default());
        let scope = Scope::try_from("xyz").unwrap();
        let (a, _, _) = premises(&mut the_context, &scope);

        let a_a = the_context.conjoin(a.clone(), a.clone()).unwrap();

        assert_eq!(a_a, a);
    }

    #[test]
    fn associative() {
        let mut the_context = Context::from_config(Config::default());
        let scope = Scope::try_from("xyz").unwrap();
        let (a, b, c) = premises(&mut the_context, &scope);

        let left_first = {
            let a_b = the_context.conjoin(a.clone(), b.clone()).unwrap();
            the_context.conjoin(a_b, c.clone()).unwrap()
        };
        let right_first = {
            let b_c = the_context.conjoin(b, c).unwrap();
            the_context.conjoin(a, b_c).unwrap()
        };

        assert_eq!(left_first, right_first);
    }

    #[test]
    fn monotonic() {
        let mut the_context = Context::from_config(Config::default());
        let scope = Scope::try_from("xyz").unwrap();
        let (a, b, _) = premises(&mut the_context, &scope);

        let a_b = the_context.conjoin(a.clone(), b.clone()).unwrap();

        for index in 0..a.table().len() {
            if a.table()[index] || b.table()[index] {
                assert!(a_b.table()[index]);
            }
        }
    }

    #[test]
    fn scopes_must_match() {
        let mut the_context = Context::from_config(Config::default());

        // The same symbols in a different order are a different scope.
        let x_y = Scope::try_from("xy").unwrap();
        let y_x = Scope::try_from("yx").unwrap();

        let over_x_y = the_context.equation("xy = 0", &x_y).unwrap();
        let over_y_x = the_context.equation("xy = 0", &y_x).unwrap();

        assert_eq!(
            the_context.conjoin(over_x_y, over_y_x),
            Err(ErrorKind::Combine(err::CombineError::ScopeMismatch))
        );
    }
}

mod elimination {
    use super::*;
    use elective::types::err::{self, ErrorKind};

    #[test]
    fn projection_of_an_independent_symbol_preserves_the_table() {
        let mut the_context = Context::from_config(Config::default());
        let scope = Scope::try_from("xy").unwrap();

        // Forbids x = 1, whatever the value of y.
        let nothing_is_x = the_context.equation("x = 0", &scope).unwrap();
        let narrowed = the_context.eliminate(nothing_is_x, 'y').unwrap();

        assert_eq!(narrowed.scope().to_string(), "x");
        assert_eq!(narrowed.table(), vec![false, true]);
        assert_eq!(narrowed.to_string(), "x = 0");
    }

    #[test]
    fn unknown_symbols_are_reported() {
        let mut the_context = Context::from_config(Config::default());
        let scope = Scope::try_from("xy").unwrap();

        let equation = the_context.equation("xy = 0", &scope).unwrap();

        assert_eq!(
            the_context.eliminate(equation, 'w'),
            Err(ErrorKind::Eliminate(err::EliminateError::UnknownSymbol('w')))
        );
    }

    #[test]
    fn eliminating_the_last_symbol_of_a_contradiction() {
        let mut the_context = Context::from_config(Config::default());
        let scope = Scope::try_from("x").unwrap();

        let contradiction = the_context.equation("1 = 0", &scope).unwrap();
        let narrowed = the_context.eliminate(contradiction, 'x').unwrap();

        assert!(narrowed.scope().is_empty());
        assert_eq!(narrowed.to_string(), "1 = 0");
    }

    #[test]
    fn eliminating_the_last_symbol_of_a_satisfiable_equation() {
        let mut the_context = Context::from_config(Config::default());
        let scope = Scope::try_from("x").unwrap();

        let nothing_is_x = the_context.equation("x = 0", &scope).unwrap();
        let narrowed = the_context.eliminate(nothing_is_x, 'x').unwrap();

        assert!(narrowed.scope().is_empty());
        assert_eq!(narrowed.to_string(), "0 = 0");
    }
}
