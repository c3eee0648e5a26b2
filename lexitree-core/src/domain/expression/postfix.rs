//! Shunting-yard conversion and postfix evaluation

use super::error::EvalError;
use super::tokenizer::Token;

/// Arithmetic operators with defined semantics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn parse(symbol: &str) -> Result<Self, EvalError> {
        match symbol {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Subtract),
            "*" => Ok(Operator::Multiply),
            "/" => Ok(Operator::Divide),
            other => Err(EvalError::UnsupportedOperator(other.to_string())),
        }
    }

    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Subtract => 1,
            Operator::Multiply | Operator::Divide => 2,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// `a op b`, where `a` is the left operand
    pub fn apply(self, a: f64, b: f64) -> Result<f64, EvalError> {
        match self {
            Operator::Add => Ok(a + b),
            Operator::Subtract => Ok(a - b),
            Operator::Multiply => Ok(a * b),
            Operator::Divide if b == 0.0 => Err(EvalError::DivisionByZero),
            Operator::Divide => Ok(a / b),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PostfixToken {
    Number(f64),
    Operator(Operator),
}

#[derive(Debug, Clone, Copy)]
enum Pending {
    Open,
    Operator(Operator),
}

/// Reorder infix tokens into postfix notation.
///
/// Equal precedence pops before pushing, so operators are left-associative.
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<PostfixToken>, EvalError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Pending> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(value) => output.push(PostfixToken::Number(*value)),
            Token::Operator(symbol) => {
                let incoming = Operator::parse(symbol)?;
                while let Some(Pending::Operator(top)) = stack.last().copied() {
                    if top.precedence() < incoming.precedence() {
                        break;
                    }
                    output.push(PostfixToken::Operator(top));
                    stack.pop();
                }
                stack.push(Pending::Operator(incoming));
            }
            Token::Open => stack.push(Pending::Open),
            Token::Close => loop {
                match stack.pop() {
                    Some(Pending::Operator(op)) => output.push(PostfixToken::Operator(op)),
                    Some(Pending::Open) => break,
                    None => return Err(EvalError::MismatchedParentheses),
                }
            },
        }
    }

    while let Some(pending) = stack.pop() {
        match pending {
            Pending::Operator(op) => output.push(PostfixToken::Operator(op)),
            Pending::Open => return Err(EvalError::MismatchedParentheses),
        }
    }

    Ok(output)
}

/// Evaluate a postfix sequence with a value stack
pub fn evaluate_postfix(tokens: &[PostfixToken]) -> Result<f64, EvalError> {
    let mut stack: Vec<f64> = Vec::new();

    for token in tokens {
        match *token {
            PostfixToken::Number(value) => stack.push(value),
            PostfixToken::Operator(op) => {
                let missing = || EvalError::InsufficientOperands {
                    operator: op.symbol(),
                };
                let b = stack.pop().ok_or_else(missing)?;
                let a = stack.pop().ok_or_else(missing)?;
                stack.push(op.apply(a, b)?);
            }
        }
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        rest => Err(EvalError::UnbalancedStack {
            remaining: rest.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(value: f64) -> Token {
        Token::Number(value)
    }

    fn op(symbol: &str) -> Token {
        Token::Operator(symbol.to_string())
    }

    #[test]
    fn test_precedence_orders_output() {
        // 2 + 3 * 4 -> 2 3 4 * +
        let postfix = to_postfix(&[num(2.0), op("+"), num(3.0), op("*"), num(4.0)]).unwrap();
        assert_eq!(
            postfix,
            vec![
                PostfixToken::Number(2.0),
                PostfixToken::Number(3.0),
                PostfixToken::Number(4.0),
                PostfixToken::Operator(Operator::Multiply),
                PostfixToken::Operator(Operator::Add),
            ]
        );
    }

    #[test]
    fn test_left_associative_subtraction() {
        let postfix = to_postfix(&[num(10.0), op("-"), num(4.0), op("-"), num(3.0)]).unwrap();
        assert_eq!(evaluate_postfix(&postfix).unwrap(), 3.0);
    }

    #[test]
    fn test_unmatched_close_paren() {
        assert_eq!(
            to_postfix(&[num(1.0), Token::Close]),
            Err(EvalError::MismatchedParentheses)
        );
    }

    #[test]
    fn test_stray_open_paren() {
        assert_eq!(
            to_postfix(&[Token::Open, num(1.0), op("+"), num(2.0)]),
            Err(EvalError::MismatchedParentheses)
        );
    }

    #[test]
    fn test_operand_shortage_and_excess() {
        let postfix = to_postfix(&[num(1.0), op("+")]).unwrap();
        assert_eq!(
            evaluate_postfix(&postfix),
            Err(EvalError::InsufficientOperands { operator: '+' })
        );

        let postfix = to_postfix(&[num(1.0), num(2.0)]).unwrap();
        assert_eq!(
            evaluate_postfix(&postfix),
            Err(EvalError::UnbalancedStack { remaining: 2 })
        );
    }

    #[test]
    fn test_unsupported_operator_run() {
        assert_eq!(
            to_postfix(&[num(1.0), op("**"), num(2.0)]),
            Err(EvalError::UnsupportedOperator("**".into()))
        );
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(Operator::Divide.apply(5.0, 0.0), Err(EvalError::DivisionByZero));
    }
}
