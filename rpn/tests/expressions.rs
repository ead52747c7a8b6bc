use rpn::{compile, eval_str, ErrorKind, Value};

enum Expect {
    Int(i64),
    Float(f64),
    Fails(ErrorKind, &'static str),
}

struct Case {
    exp: &'static str,
    rpn: Option<&'static str>,
    expect: Expect,
}

fn case(exp: &'static str, rpn: &'static str, expect: Expect) -> Case {
    Case { exp, rpn: Some(rpn), expect }
}

fn fails(exp: &'static str, kind: ErrorKind, msg: &'static str) -> Case {
    Case { exp, rpn: None, expect: Expect::Fails(kind, msg) }
}

fn cases() -> Vec<Case> {
    use ErrorKind::*;
    use Expect::*;
    vec![
        case("1+2*4-3", "124*+3-", Int(6)),
        case("1.0+2.5*4.0-3.2/1.0", "12.54*+3.21/-", Float(7.8)),
        case("(4/2)", "42/", Float(2.0)),
        case("(1+2)*4-3", "12+4*3-", Int(9)),
        case("1+2*(4-3)", "1243-*+", Int(3)),
        case("1+((4+3)-2)*2-2", "143+2-2*+2-", Int(9)),
        case("(1+2)*(1--2)", "12+12--*", Int(9)),
        case("(((1+2)))*(1--2)", "12+12--*", Int(9)),
        case("(4+3)-2", "43+2-", Int(5)),
        case("2*-3", "23-*", Int(-6)),
        case(" 1 - 2 +  3   *  ( 4  / 5 ) + + 6 - - 7  ", "12345/*6++7---", Float(-16.4)),
        case("-2*-3", "2-3-*", Int(6)),
        case("(+2--2)*-3", "22--3-*", Int(-12)),
        case("-4.1", "4.1-", Float(-4.1)),
        case("3", "3", Int(3)),
        case("6%(3-1)", "631-%", Int(0)),
        case("1.0+2", "12+", Float(3.0)),
        case("2-1.0", "21-", Float(1.0)),
        case("6-2-1", "621--", Int(5)),
        fails("-99999999999999999999", InvalidOperand,
              "invalid operand: cannot parse \"99999999999999999999\""),
        case("2%1.4", "21.4%", Fails(InvalidOperand,
              "invalid operand: cannot perform modulus operation with floats")),
        case("1.4%2", "1.42%", Fails(InvalidOperand,
              "invalid operand: cannot perform modulus operation with floats")),
        case("1.4%2.3", "1.42.3%", Fails(InvalidOperand,
              "invalid operand: cannot perform modulus operation with floats")),
        fails("(4-1", InvalidExpression, "invalid expression: unclosed parenthesis"),
        fails("4-1)", InvalidExpression, "invalid expression: too many close parenthesis"),
        fails("2=1", InvalidSyntax, "invalid syntax: no valid token found at 1: \"=1\""),
        case("1 2-1", "121-", Fails(InvalidExpression,
              "invalid expression: not all operands consumed (2 left)")),
        case("1*", "1*", Fails(InvalidExpression,
              "invalid expression: insufficient operands 2 != 1")),
    ]
}

#[test]
fn expressions() {
    for case in cases() {
        let compiled = compile(case.exp);
        match case.rpn {
            Some(rpn) => match compiled {
                Ok(ref notation) => assert_eq!(notation.render(), rpn, "rpn of {:?}", case.exp),
                Err(ref e) => panic!("{:?} failed to compile: {}", case.exp, e),
            },
            None => assert!(compiled.is_err(), "{:?} should not compile", case.exp),
        }

        let result = compiled.and_then(|notation| notation.evaluate());
        match (case.expect, result) {
            (Expect::Int(i), Ok(operand)) => {
                assert_eq!(operand.value(), Value::Int(i), "value of {:?}", case.exp)
            }
            (Expect::Float(x), Ok(operand)) => match operand.value() {
                Value::Float(y) => assert!((x - y).abs() < 1.0e-10, "{:?}: {} != {}", case.exp, x, y),
                other => panic!("{:?} should be a float, got {:?}", case.exp, other),
            },
            (Expect::Fails(kind, msg), Err(e)) => {
                assert_eq!(e.kind(), kind, "error kind of {:?}", case.exp);
                assert_eq!(e.to_string(), msg, "error of {:?}", case.exp);
            }
            (Expect::Fails(_, msg), Ok(operand)) => {
                panic!("{:?} gave {} instead of failing with {}", case.exp, operand, msg)
            }
            (_, Err(e)) => panic!("{:?} failed: {}", case.exp, e),
        }
    }
}

#[test]
fn one_shot() {
    assert_eq!(eval_str("2 * (3 + 4)").map(|r| r.value()), Ok(Value::Int(14)));
    assert_eq!(eval_str("7 / 2").map(|r| r.value()), Ok(Value::Float(3.5)));
    assert_eq!(eval_str("(").map_err(|e| e.kind()), Err(ErrorKind::InvalidExpression));
}

#[test]
fn shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| std::thread::spawn(move || eval_str(&format!("{} * (1 + 2)", i)).map(|r| r.value())))
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), Ok(Value::Int(i as i64 * 3)));
    }
}
