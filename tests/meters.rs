use unitfmt::{Numeric, format_meters};

fn check(cases: &[(&str, Numeric<'_>, i32, f64)]) {
    for (expected, value, decimals, bias) in cases {
        assert_eq!(
            format_meters(*value, *decimals, *bias),
            *expected,
            "format_meters({value:?}, {decimals}, {bias})"
        );
    }
}

#[test]
fn invalid_input_formats_as_empty() {
    check(&[
        ("", Numeric::Text("ThisIsAString"), 2, 1.0),
        ("", Numeric::Text(""), 2, 1.0),
        ("", Numeric::Int(1), -1, 1.0),
    ]);
}

#[test]
fn picks_the_tier_the_value_reaches() {
    check(&[
        ("1000.00 Km", Numeric::Int(1_000_000), 2, 1.0),
        ("100.00 Km", Numeric::Int(100_000), 2, 1.0),
        ("10.00 Km", Numeric::Int(10_000), 2, 1.0),
        ("1.00 Km", Numeric::Int(1000), 2, 1.0),
        ("100.00 m", Numeric::Int(100), 2, 1.0),
        ("10.00 m", Numeric::Int(10), 2, 1.0),
        ("1.00 m", Numeric::Int(1), 2, 1.0),
        ("10.00 cm", Numeric::Float(0.1), 2, 1.0),
        ("1.00 cm", Numeric::Float(0.01), 2, 1.0),
        ("1.00 mm", Numeric::Float(0.001), 2, 1.0),
        ("100.00 µm", Numeric::Float(0.0001), 2, 1.0),
        ("10.00 µm", Numeric::Float(0.00001), 2, 1.0),
        ("1.00 µm", Numeric::Float(0.000001), 2, 1.0),
        ("10.00 nm", Numeric::Float(0.00000001), 2, 1.0),
        ("1.00 nm", Numeric::Float(0.000000001), 2, 1.0),
        ("10.00 pm", Numeric::Float(0.00000000001), 2, 1.0),
        ("1.00 pm", Numeric::Float(0.000000000001), 2, 1.0),
    ]);
}

#[test]
fn zero_and_precision() {
    check(&[
        ("0.00 m", Numeric::Float(0.0), 2, 1.0),
        ("0.00 m", Numeric::Int(0), 2, 1.0),
        ("0.00 m", Numeric::Text("0"), 2, 1.0),
        ("0.00 m", Numeric::Text("0.0"), 2, 1.0),
        ("0.0 m", Numeric::Int(0), 1, 1.0),
        ("0.000 m", Numeric::Int(0), 3, 1.0),
        ("0 m", Numeric::Int(0), 0, 1.0),
        ("1 m", Numeric::Int(1), 0, 1.0),
        ("1.0 m", Numeric::Int(1), 1, 1.0),
        ("1.000 m", Numeric::Int(1), 3, 1.0),
        ("10 m", Numeric::Int(10), 0, 1.0),
        ("10.0 m", Numeric::Int(10), 1, 1.0),
        ("10.000 m", Numeric::Int(10), 3, 1.0),
    ]);
}

#[test]
fn rounding_at_tier_boundaries() {
    check(&[
        ("2.50 m", Numeric::Float(2.5), 2, 1.0),
        ("0.25 cm", Numeric::Float(2.5), 2, 1e-3),
        ("2.50 Km", Numeric::Float(2.5), 2, 1e3),
        ("2.50 Km", Numeric::Float(2.501), 2, 1e3),
        ("2.51 Km", Numeric::Float(2.508), 2, 1e3),
    ]);
}

#[test]
fn bias_and_sign() {
    check(&[
        ("1.00 mm", Numeric::Int(1), 2, 1e-3),
        ("1.00 µm", Numeric::Int(1), 2, 1e-6),
        ("1.00 Km", Numeric::Int(1), 2, 1e3),
        ("1.00 m", Numeric::Int(1000), 2, 1e-3),
        ("1000.00 Km", Numeric::Int(1000), 2, 1e3),
        ("1.00 mm", Numeric::Int(1000), 2, 1e-6),
        ("-1.00 m", Numeric::Int(1), 2, -1.0),
        ("-1.20 m", Numeric::Int(1), 2, -1.2),
        ("-1.00 mm", Numeric::Int(1), 2, -1e-3),
        ("-1.00 cm", Numeric::Int(1), 2, -1e-2),
        ("-1.00 Km", Numeric::Int(1), 2, -1e3),
        ("-1000.00 Km", Numeric::Int(1), 2, -1e6),
    ]);
}

#[test]
fn fractions_of_a_unit_stay_on_the_unit_tier() {
    check(&[("0.50 m", Numeric::Float(0.5), 2, 1.0), ("0.20 m", Numeric::Text(".2"), 2, 1.0)]);
}
