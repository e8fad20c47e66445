// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Whitelist-checked evaluation of parsed expressions.

use crate::error::CalcError;
use crate::parser::{BinOp, Expr, UnaryOp};

/// Whitelisted named constants.
const CONSTANTS: &[(&str, f64)] = &[("pi", std::f64::consts::PI), ("e", std::f64::consts::E)];

/// Evaluate a parsed expression.
pub fn evaluate(expr: &Expr) -> Result<f64, CalcError> {
    match expr {
        Expr::Number(value) => Ok(*value),
        Expr::Ident(name) => CONSTANTS
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
            .ok_or_else(|| CalcError::unsupported_variable(name.clone())),
        Expr::Unary(op, operand) => {
            let value = evaluate(operand)?;
            Ok(match op {
                UnaryOp::Neg => -value,
                UnaryOp::Pos => value,
            })
        }
        Expr::Binary(op, lhs, rhs) => {
            let left = evaluate(lhs)?;
            let right = evaluate(rhs)?;
            apply_binary(*op, left, right)
        }
        Expr::Call(name, args) => {
            let values = args
                .iter()
                .map(evaluate)
                .collect::<Result<Vec<f64>, CalcError>>()?;
            apply_function(name, &values)
        }
    }
}

fn apply_binary(op: BinOp, left: f64, right: f64) -> Result<f64, CalcError> {
    match op {
        BinOp::Add => Ok(left + right),
        BinOp::Sub => Ok(left - right),
        BinOp::Mul => Ok(left * right),
        BinOp::Div => {
            if right == 0.0 {
                Err(CalcError::DivisionByZero)
            } else {
                Ok(left / right)
            }
        }
        BinOp::Mod => {
            if right == 0.0 {
                Err(CalcError::DivisionByZero)
            } else {
                Ok(left.rem_euclid(right))
            }
        }
        BinOp::Pow => {
            if left == 0.0 && right < 0.0 {
                return Err(CalcError::DivisionByZero);
            }
            let result = left.powf(right);
            if result.is_nan() {
                return Err(CalcError::Domain(format!(
                    "cannot raise {left} to the power {right}"
                )));
            }
            Ok(result)
        }
    }
}

fn apply_function(name: &str, args: &[f64]) -> Result<f64, CalcError> {
    // Variadic and multi-argument functions first.
    match name {
        "min" => {
            require_at_least(name, args, 1)?;
            return Ok(args.iter().copied().fold(f64::INFINITY, f64::min));
        }
        "max" => {
            require_at_least(name, args, 1)?;
            return Ok(args.iter().copied().fold(f64::NEG_INFINITY, f64::max));
        }
        "round" => {
            return match args {
                [x] => Ok(x.round()),
                [x, digits] => {
                    let factor = 10f64.powi(*digits as i32);
                    Ok((x * factor).round() / factor)
                }
                _ => Err(arity_error(name, "1 or 2")),
            };
        }
        "log" => {
            return match args {
                [x] => {
                    check_positive(name, *x)?;
                    Ok(x.ln())
                }
                [x, base] => {
                    check_positive(name, *x)?;
                    check_positive(name, *base)?;
                    Ok(x.log(*base))
                }
                _ => Err(arity_error(name, "1 or 2")),
            };
        }
        _ => {}
    }

    let [x] = args else {
        if is_known_function(name) {
            return Err(arity_error(name, "1"));
        }
        return Err(CalcError::unsupported_function(name));
    };
    let x = *x;

    match name {
        "abs" => Ok(x.abs()),
        "sin" => Ok(x.sin()),
        "cos" => Ok(x.cos()),
        "tan" => Ok(x.tan()),
        "asin" => {
            check_range(name, x, -1.0, 1.0)?;
            Ok(x.asin())
        }
        "acos" => {
            check_range(name, x, -1.0, 1.0)?;
            Ok(x.acos())
        }
        "atan" => Ok(x.atan()),
        "sinh" => Ok(x.sinh()),
        "cosh" => Ok(x.cosh()),
        "tanh" => Ok(x.tanh()),
        "log10" => {
            check_positive(name, x)?;
            Ok(x.log10())
        }
        "log2" => {
            check_positive(name, x)?;
            Ok(x.log2())
        }
        "exp" => Ok(x.exp()),
        "sqrt" => {
            if x < 0.0 {
                Err(CalcError::Domain(format!(
                    "sqrt of a negative number ({x})"
                )))
            } else {
                Ok(x.sqrt())
            }
        }
        "ceil" => Ok(x.ceil()),
        "floor" => Ok(x.floor()),
        "degrees" => Ok(x.to_degrees()),
        "radians" => Ok(x.to_radians()),
        "factorial" => factorial(x),
        other => Err(CalcError::unsupported_function(other)),
    }
}

fn is_known_function(name: &str) -> bool {
    matches!(
        name,
        "abs" | "sin" | "cos" | "tan" | "asin" | "acos" | "atan" | "sinh" | "cosh" | "tanh"
            | "log10" | "log2" | "exp" | "sqrt" | "ceil" | "floor" | "degrees" | "radians"
            | "factorial"
    )
}

fn factorial(x: f64) -> Result<f64, CalcError> {
    if x < 0.0 || x.fract() != 0.0 {
        return Err(CalcError::Domain(
            "factorial requires a non-negative integer".to_string(),
        ));
    }
    // 171! overflows f64.
    if x > 170.0 {
        return Err(CalcError::Domain(format!(
            "factorial of {x} is too large to represent"
        )));
    }
    let mut result = 1.0;
    let mut n = 2.0;
    while n <= x {
        result *= n;
        n += 1.0;
    }
    Ok(result)
}

fn check_positive(name: &str, x: f64) -> Result<(), CalcError> {
    if x <= 0.0 {
        Err(CalcError::Domain(format!(
            "{name} requires a positive argument, got {x}"
        )))
    } else {
        Ok(())
    }
}

fn check_range(name: &str, x: f64, lo: f64, hi: f64) -> Result<(), CalcError> {
    if x < lo || x > hi {
        Err(CalcError::Domain(format!(
            "{name} requires an argument in [{lo}, {hi}], got {x}"
        )))
    } else {
        Ok(())
    }
}

fn arity_error(name: &str, expected: &str) -> CalcError {
    CalcError::Domain(format!("{name} expects {expected} argument(s)"))
}

fn require_at_least(name: &str, args: &[f64], n: usize) -> Result<(), CalcError> {
    if args.len() < n {
        Err(arity_error(name, "at least 1"))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn eval(input: &str) -> Result<f64, CalcError> {
        evaluate(&parse(input)?)
    }

    #[test]
    fn basic_arithmetic() {
        assert_eq!(eval("2+3*4").unwrap(), 14.0);
        assert_eq!(eval("10-4/2").unwrap(), 8.0);
        assert_eq!(eval("2**10").unwrap(), 1024.0);
        assert_eq!(eval("7%3").unwrap(), 1.0);
    }

    #[test]
    fn whitelisted_functions() {
        assert_eq!(eval("sqrt(16)+5").unwrap(), 9.0);
        assert_eq!(eval("abs(-3)").unwrap(), 3.0);
        assert_eq!(eval("max(1,7,3)").unwrap(), 7.0);
        assert_eq!(eval("min(4,2)").unwrap(), 2.0);
        assert_eq!(eval("factorial(5)").unwrap(), 120.0);
        assert_eq!(eval("floor(2.9)").unwrap(), 2.0);
        assert_eq!(eval("round(2.456, 2)").unwrap(), 2.46);
    }

    #[test]
    fn constants_resolve() {
        assert!((eval("sin(pi/2)").unwrap() - 1.0).abs() < 1e-12);
        assert!((eval("log(e)").unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn division_by_zero_is_structured() {
        assert_eq!(eval("10/0"), Err(CalcError::DivisionByZero));
        assert_eq!(eval("5%0"), Err(CalcError::DivisionByZero));
        assert_eq!(eval("0**-1"), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn domain_errors_are_structured() {
        assert!(matches!(eval("sqrt(-4)"), Err(CalcError::Domain(_))));
        assert!(matches!(eval("log(0)"), Err(CalcError::Domain(_))));
        assert!(matches!(eval("asin(2)"), Err(CalcError::Domain(_))));
        assert!(matches!(eval("factorial(2.5)"), Err(CalcError::Domain(_))));
        assert!(matches!(eval("factorial(500)"), Err(CalcError::Domain(_))));
    }

    #[test]
    fn variadic_functions_need_an_argument() {
        assert!(matches!(eval("min()"), Err(CalcError::Domain(_))));
        assert!(matches!(eval("max()"), Err(CalcError::Domain(_))));
        assert_eq!(eval("min(3)").unwrap(), 3.0);
        assert_eq!(eval("max(5)").unwrap(), 5.0);
    }

    #[test]
    fn unknown_names_are_unsupported() {
        assert_eq!(
            eval("bogus(3)"),
            Err(CalcError::unsupported_function("bogus"))
        );
        assert_eq!(eval("x+1"), Err(CalcError::unsupported_variable("x")));
    }

    #[test]
    fn unary_sign() {
        assert_eq!(eval("-5+3").unwrap(), -2.0);
        assert_eq!(eval("-2**2").unwrap(), -4.0);
        assert_eq!(eval("+7").unwrap(), 7.0);
    }
}
