#![warn(clippy::uninlined_format_args)]

mod i18n;

use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, tag_no_case, take_till, take_till1, take_until, take_while_m_n, take_while1},
    character::complete::{char, multispace1, one_of, u64},
    combinator::{map_opt, opt, recognize, verify},
    multi::many0,
    sequence::{delimited, preceded},
};

/// Non-negative decimal amount as written in the sheet (`3.50` is 350 at scale 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Amount {
    pub minor_units: u64,
    pub scale: u32,
}

impl Amount {
    fn from_parts(whole: u64, fraction: Option<&str>) -> Option<Self> {
        let digits = fraction.unwrap_or("");
        let scale = digits.len() as u32;
        let fraction_units: u64 = if digits.is_empty() { 0 } else { digits.parse().ok()? };
        let minor_units = whole
            .checked_mul(10_u64.checked_pow(scale)?)?
            .checked_add(fraction_units)?;
        if minor_units > i64::MAX as u64 {
            return None;
        }
        Some(Self { minor_units, scale })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeKeyword {
    Even,
    Proportional,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantEntry<'a> {
    pub name: &'a str,
    pub amount: Amount,
    pub is_host: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement<'a> {
    DeliveryFee(Amount),
    ServiceFee(Amount),
    Mode(ModeKeyword),
    Participant(ParticipantEntry<'a>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatementWithLine<'a> {
    pub line: usize,
    pub statement: Statement<'a>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderSheet<'a> {
    pub statements: Vec<StatementWithLine<'a>>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("Syntax error at line {line}: {detail}")]
    SyntaxError { line: usize, detail: String },
}

fn sp(input: &str) -> IResult<&str, &str> {
    fn comment(input: &str) -> IResult<&str, &str> {
        delimited(tag("/*"), take_until("*/"), tag("*/")).parse(input)
    }

    fn line_comment(input: &str) -> IResult<&str, &str> {
        recognize((tag("//"), take_till(|c| c == '\n'))).parse(input)
    }

    recognize(many0(alt((multispace1, comment, line_comment)))).parse(input)
}

fn currency_sign(input: &str) -> IResult<&str, char> {
    one_of("₪$€¥").parse(input)
}

fn amount(input: &str) -> IResult<&str, Amount> {
    map_opt(
        (
            opt(currency_sign),
            u64,
            opt(preceded(
                char('.'),
                take_while_m_n(1, 2, |c: char| c.is_ascii_digit()),
            )),
        ),
        |(_, whole, fraction)| Amount::from_parts(whole, fraction),
    )
    .parse(input)
}

/// Words that open fee lines. Participants with these names must be quoted.
const RESERVED_NAMES: [&str; 2] = ["delivery", "service"];

fn is_reserved(name: &str) -> bool {
    RESERVED_NAMES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(name))
}

fn identifier(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '_' || c == '-' || c == '\'').parse(input)
}

fn quoted_name(input: &str) -> IResult<&str, &str> {
    delimited(char('"'), take_till1(|c| c == '"'), char('"')).parse(input)
}

// delivery fee {amount} | service fee {amount}
fn fee_keyword<'a>(
    keyword: &'static str,
) -> impl Parser<&'a str, Output = Amount, Error = nom::error::Error<&'a str>> {
    (
        tag_no_case(keyword),
        multispace1,
        tag_no_case("fee"),
        sp,
        amount,
    )
        .map(|(_, _, _, _, amount)| amount)
}

// mode even | mode proportional
fn mode(input: &str) -> IResult<&str, ModeKeyword> {
    (
        tag_no_case("mode"),
        multispace1,
        alt((
            tag_no_case("even").map(|_| ModeKeyword::Even),
            tag_no_case("proportional").map(|_| ModeKeyword::Proportional),
        )),
    )
        .map(|(_, _, keyword)| keyword)
        .parse(input)
}

// {name} {amount} [host]
fn participant(input: &str) -> IResult<&str, ParticipantEntry<'_>> {
    (
        alt((quoted_name, verify(identifier, |name: &str| !is_reserved(name)))),
        sp,
        amount,
        opt((multispace1, tag_no_case("host"))),
    )
        .map(|(name, _, amount, host)| ParticipantEntry {
            name,
            amount,
            is_host: host.is_some(),
        })
        .parse(input)
}

fn statement(input: &str) -> IResult<&str, Statement<'_>> {
    alt((
        fee_keyword("delivery").map(Statement::DeliveryFee),
        fee_keyword("service").map(Statement::ServiceFee),
        mode.map(Statement::Mode),
        participant.map(Statement::Participant),
    ))
    .parse(input)
}

fn statement_with_sp(input: &str) -> IResult<&str, Statement<'_>> {
    (sp, statement, sp).map(|(_, stmt, _)| stmt).parse(input)
}

/// Parses an order sheet, one statement per line.
pub fn parse_order_sheet(input: &str) -> Result<OrderSheet<'_>, ParseError> {
    let mut statements = Vec::new();

    for (idx, line) in input.lines().enumerate() {
        let (rest, _) = sp(line).map_err(|e| ParseError::SyntaxError {
            line: idx + 1,
            detail: i18n::syntax_error_detail(e),
        })?;
        if rest.trim().is_empty() {
            continue;
        }
        match statement_with_sp(rest) {
            Ok((rest, stmt)) => {
                if !rest.trim().is_empty() {
                    return Err(ParseError::SyntaxError {
                        line: idx + 1,
                        detail: i18n::syntax_error_unparsed_detail(rest.trim()),
                    });
                }
                statements.push(StatementWithLine {
                    line: idx + 1,
                    statement: stmt,
                });
            }
            Err(e) => {
                let detail = match identifier(rest) {
                    Ok((_, word)) if is_reserved(word) => i18n::reserved_name_detail(word),
                    _ => i18n::syntax_error_detail(e),
                };
                return Err(ParseError::SyntaxError {
                    line: idx + 1,
                    detail,
                });
            }
        }
    }

    Ok(OrderSheet { statements })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn amt(minor_units: u64, scale: u32) -> Amount {
        Amount { minor_units, scale }
    }

    #[rstest]
    #[case::whole("20", amt(20, 0))]
    #[case::one_decimal("3.5", amt(35, 1))]
    #[case::cents("3.50", amt(350, 2))]
    #[case::shekel("₪12.05", amt(1205, 2))]
    #[case::dollar("$0", amt(0, 0))]
    fn test_amount(#[case] input: &str, #[case] expected: Amount) {
        let (rest, parsed) = amount(input).unwrap();
        assert!(rest.is_empty());
        assert_eq!(parsed, expected);
    }

    #[rstest]
    #[case::negative("-5")]
    #[case::too_large("99999999999999999999")]
    #[case::empty("")]
    fn test_rejects_invalid_amount(#[case] input: &str) {
        assert!(amount(input).is_err());
    }

    #[rstest]
    #[case::delivery("delivery fee 5", Statement::DeliveryFee(amt(5, 0)))]
    #[case::delivery_fee("Delivery Fee 4.90", Statement::DeliveryFee(amt(490, 2)))]
    #[case::service("service fee 3.5", Statement::ServiceFee(amt(35, 1)))]
    #[case::service_fee("SERVICE fee ₪2", Statement::ServiceFee(amt(2, 0)))]
    #[case::mode_even("mode even", Statement::Mode(ModeKeyword::Even))]
    #[case::mode_proportional("mode Proportional", Statement::Mode(ModeKeyword::Proportional))]
    #[case::host(
        "Alice 0 host",
        Statement::Participant(ParticipantEntry { name: "Alice", amount: amt(0, 0), is_host: true })
    )]
    #[case::guest(
        "Bob 20",
        Statement::Participant(ParticipantEntry { name: "Bob", amount: amt(20, 0), is_host: false })
    )]
    #[case::quoted(
        "\"Carol Ann\" 30.25 HOST",
        Statement::Participant(ParticipantEntry {
            name: "Carol Ann",
            amount: amt(3025, 2),
            is_host: true,
        })
    )]
    #[case::keyword_prefixed_name(
        "deliveryman 7",
        Statement::Participant(ParticipantEntry {
            name: "deliveryman",
            amount: amt(7, 0),
            is_host: false,
        })
    )]
    #[case::quoted_reserved_name(
        "\"Service\" 12",
        Statement::Participant(ParticipantEntry { name: "Service", amount: amt(12, 0), is_host: false })
    )]
    #[case::unicode_name(
        "たろう 1200",
        Statement::Participant(ParticipantEntry { name: "たろう", amount: amt(1200, 0), is_host: false })
    )]
    fn test_statement(#[case] input: &str, #[case] expected: Statement<'_>) {
        let (rest, stmt) = statement(input).unwrap();
        assert!(rest.is_empty(), "unparsed: {rest}");
        assert_eq!(stmt, expected);
    }

    #[test]
    fn test_parse_order_sheet_skips_blank_lines_and_comments() {
        let input = "// group order\n\ndelivery fee 5\nservice fee 3 /* app fee */\n\nAlice 0 host\nBob 20 // pizza\n";
        let sheet = parse_order_sheet(input).expect("sheet should parse");

        let lines: Vec<usize> = sheet.statements.iter().map(|s| s.line).collect();
        assert_eq!(lines, vec![3, 4, 6, 7]);
        assert_eq!(sheet.statements[0].statement, Statement::DeliveryFee(amt(5, 0)));
        assert_eq!(
            sheet.statements[3].statement,
            Statement::Participant(ParticipantEntry {
                name: "Bob",
                amount: amt(20, 0),
                is_host: false,
            })
        );
    }

    #[rstest]
    #[case::missing_amount("delivery fee 5\nBob", 2)]
    #[case::host_without_space("Bob 20host", 1)]
    #[case::fee_without_keyword("delivery 5", 1)]
    #[case::reserved_participant("delivery fee 5\nService 12\nBob 20 host", 2)]
    #[case::mode_without_space("modeeven", 1)]
    #[case::three_decimals("Bob 10.505", 1)]
    #[case::trailing_words("mode even please", 1)]
    #[case::unknown_mode("Alice 1\nmode weighted", 2)]
    #[case::unterminated_comment("Bob 10 /* note", 1)]
    fn test_reports_syntax_error_line(#[case] input: &str, #[case] expected_line: usize) {
        match parse_order_sheet(input) {
            Err(ParseError::SyntaxError { line, .. }) => assert_eq!(line, expected_line),
            other => panic!("expected syntax error, got {other:?}"),
        }
    }

    #[cfg(not(feature = "ja"))]
    #[rstest]
    #[case::bare_fee_line("delivery 5", "delivery")]
    #[case::capitalized("Service 12", "Service")]
    fn test_reserved_name_error_suggests_quoting(#[case] input: &str, #[case] word: &str) {
        match parse_order_sheet(input) {
            Err(ParseError::SyntaxError { detail, .. }) => {
                assert!(detail.contains(&format!("'{word}' is reserved")), "{detail}");
                assert!(detail.contains(&format!("\"{word}\"")), "{detail}");
            }
            other => panic!("expected syntax error, got {other:?}"),
        }
    }

    #[test]
    fn test_host_marker_needs_separator() {
        let (rest, entry) = participant("Bob 20 host").unwrap();
        assert!(rest.is_empty());
        assert!(entry.is_host);

        let (rest, entry) = participant("Bob 20host").unwrap();
        assert_eq!(rest, "host");
        assert!(!entry.is_host);
    }

    #[test]
    fn test_empty_sheet_has_no_statements() {
        let sheet = parse_order_sheet("").expect("empty sheet should parse");
        assert!(sheet.statements.is_empty());
    }
}
