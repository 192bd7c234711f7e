use alloc::{collections::BTreeMap, string::{String, ToString}, vec, vec::Vec};

use crate::{
    node::{build::{self, ApplyOptions}, sort_variables, Decomposition, Node},
    printers::TextPrinter,
};

use super::util::init_logger;

#[test]
fn test_variable_factor_name() {
    assert_eq!(ident!(x).variable_factor_name(), Some("x"));
    assert_eq!(parse!("x^2").variable_factor_name(), Some("x"));
    assert_eq!(parse!("y^x^2").variable_factor_name(), Some("y"));
    assert_eq!(num!(2).variable_factor_name(), None);
    assert_eq!(parse!("(x + 1)^2").variable_factor_name(), None);
}

#[test]
fn test_sort_variables() {
    assert_eq!(
        sort_variables(vec![ident!(y), ident!(x)]),
        vec![ident!(x), ident!(y)],
    );

    // Equal names keep their order
    assert_eq!(
        sort_variables(vec![parse!("x^2"), ident!(y), ident!(x)]),
        vec![parse!("x^2"), ident!(x), ident!(y)],
    );

    assert_eq!(sort_variables(vec![]), Vec::<Node>::new());
}

#[test]
fn test_variable_factors() {
    assert_eq!(ident!(x).variable_factors(), vec![ident!(x)]);
    assert_eq!(parse!("x^2").variable_factors(), vec![parse!("x^2")]);
    assert_eq!(parse!("3 x y^2").variable_factors(), vec![ident!(x), parse!("y^2")]);
    assert_eq!(parse!("2 * y * x").variable_factors(), vec![ident!(y), ident!(x)]);
    assert_eq!(parse!("-2x").variable_factors(), vec![ident!(x)]);
    assert_eq!(num!(5).variable_factors(), Vec::<Node>::new());
    assert_eq!(parse!("x + 1").variable_factors(), Vec::<Node>::new());
}

#[test]
fn test_coefficient() {
    assert_eq!(num!(5).coefficient(), Some(num!(5)));
    assert_eq!(parse!("-5").coefficient(), Some(parse!("-5")));
    assert_eq!(ident!(x).coefficient(), Some(num!(1)));
    assert_eq!(parse!("x^2").coefficient(), Some(num!(1)));
    assert_eq!(parse!("2x").coefficient(), Some(num!(2)));
    assert_eq!(parse!("x y").coefficient(), Some(num!(1)));
    assert_eq!(parse!("-2x").coefficient(), Some(parse!("-2")));

    assert_eq!(
        parse!("2 * 3 * x").coefficient(),
        Some(build::mul(vec![num!(2), num!(3)])),
    );

    assert_eq!(
        build::implicit_mul(vec![parse!("2/3"), ident!(x)]).coefficient(),
        Some(parse!("2/3")),
    );

    assert_eq!(parse!("sin(x)").coefficient(), None);
    assert_eq!(parse!("x + 1").coefficient(), None);
}

#[test]
fn test_coefficient_keeps_was_minus() {
    // x - 2y
    let difference = build::sub(ident!(x), parse!("2y"));
    let subtracted = &difference.args()[1];

    assert_eq!(
        subtracted.coefficient(),
        Some(build::neg(num!(2), ApplyOptions::was_minus())),
    );
}

#[test]
fn test_poly_degree() {
    assert_eq!(num!(5).poly_degree(), Some(num!(0)));
    assert_eq!(ident!(x).poly_degree(), Some(num!(1)));
    assert_eq!(parse!("x + 1").poly_degree(), Some(num!(1)));
    assert_eq!(parse!("x^3").poly_degree(), Some(num!(3)));
    assert_eq!(parse!("6x^2").poly_degree(), Some(num!(2)));
    assert_eq!(parse!("-x^3").poly_degree(), Some(num!(3)));
    assert_eq!(parse!("-(x^3)").poly_degree(), Some(num!(3)));
    assert_eq!(parse!("sin(x)").poly_degree(), None);
}

#[test]
#[should_panic]
fn test_poly_degree_of_negated_identifier() {
    // The negated node is assumed to have an exponent
    parse!("-x").poly_degree();
}

#[test]
fn test_coefficients_and_constants() {
    init_logger();
    let printer = TextPrinter::default();

    let mut expected_map = BTreeMap::new();
    expected_map.insert("x".to_string(), vec![num!(2), num!(3)]);
    assert_eq!(
        parse!("2x + 3x + 5").coefficients_and_constants(&printer),
        Decomposition {
            coefficient_map: expected_map,
            constants: vec![num!(5)],
            others: vec![],
        }
    );

    let result = parse!("x^2 + 2x^2 + x - 4").coefficients_and_constants(&printer);
    assert_eq!(result.coefficient_map["x^2"], vec![num!(1), num!(2)]);
    assert_eq!(result.coefficient_map["x"], vec![num!(1)]);
    assert_eq!(result.constants, vec![build::neg(num!(4), ApplyOptions::was_minus())]);
    assert!(result.others.is_empty());
}

#[test]
fn test_coefficients_of_negated_terms() {
    let result = parse!("3x - 2x").coefficients_and_constants(&TextPrinter::default());
    assert_eq!(
        result.coefficient_map["x"],
        vec![num!(3), build::neg(num!(2), ApplyOptions::was_minus())],
    );
}

#[test]
fn test_multivariable_keys() {
    let printer = TextPrinter::default();

    // Factor order doesn't matter
    let result = parse!("2xy + 3yx").coefficients_and_constants(&printer);
    assert_eq!(result.coefficient_map.len(), 1);
    assert_eq!(result.coefficient_map["x y"], vec![num!(2), num!(3)]);

    // Implicit and explicit products are keyed separately
    let result = parse!("2xy + 3 * x * y").coefficients_and_constants(&printer);
    assert_eq!(result.coefficient_map["x y"], vec![num!(2)]);
    assert_eq!(result.coefficient_map["x * y"], vec![num!(3)]);
}

#[test]
fn test_coefficients_and_constants_others() {
    let result = parse!("(x + 1) + 2").coefficients_and_constants(&TextPrinter::default());
    assert!(result.coefficient_map.is_empty());
    assert_eq!(result.constants, vec![num!(2)]);
    assert_eq!(result.others, vec![parse!("(x + 1)")]);

    // Non-polynomial operations are looked inside
    let result = parse!("x + sin(x)").coefficients_and_constants(&TextPrinter::default());
    assert_eq!(result.coefficient_map["x"], vec![num!(1), num!(1)]);
    assert!(result.others.is_empty());
}

#[test]
fn test_coefficients_with_stub_printer() {
    // Keys come from the injected printer, here just the variable name
    let printer = |n: &Node| String::from(n.variable_factor_name().unwrap_or("?"));

    let result = parse!("2x + 3x^2").coefficients_and_constants(&printer);
    assert_eq!(result.coefficient_map.len(), 1);
    assert_eq!(result.coefficient_map["x"], vec![num!(2), num!(3)]);
}

#[test]
fn test_collect_into_existing_decomposition() {
    let printer = TextPrinter::default();
    let mut decomposition = Decomposition::default();

    parse!("2x + 1").collect_coefficients_and_constants(&printer, &mut decomposition);
    parse!("5x + 2").collect_coefficients_and_constants(&printer, &mut decomposition);

    assert_eq!(decomposition.coefficient_map["x"], vec![num!(2), num!(5)]);
    assert_eq!(decomposition.constants, vec![num!(1), num!(2)]);

    // The owning form always starts afresh
    let fresh = parse!("x").coefficients_and_constants(&printer);
    assert_eq!(fresh.coefficient_map["x"], vec![num!(1)]);
    assert!(fresh.constants.is_empty());
}

#[test]
fn test_has_same_base() {
    let printer = TextPrinter::default();
    let x_plus_one = build::add(vec![ident!(x), num!(1)]);

    assert!(build::pow(x_plus_one.clone(), num!(2)).has_same_base(&x_plus_one, &printer));
    assert!(x_plus_one.has_same_base(&build::pow(x_plus_one.clone(), num!(3)), &printer));
    assert!(parse!("x^2").has_same_base(&parse!("x^3"), &printer));
    assert!(ident!(x).has_same_base(&ident!(x), &printer));

    assert!(!parse!("x^2").has_same_base(&build::pow(x_plus_one, num!(2)), &printer));
    assert!(!ident!(x).has_same_base(&ident!(y), &printer));
    assert!(!parse!("2^x").has_same_base(&parse!("3^x"), &printer));
}
