use std::fmt;
use std::io::{BufRead, Write};

use inquire::Text;
use tracing::{info, warn};

use crate::billing::{parse_hours, InvoiceRecord, LineItem, RateTable};
use crate::error::InvoiceError;

type InputResult<T> = Result<T, InvoiceError>;

const AFFIRMATIVE: &str = "yes";

/// One question, one line of answer.
pub trait Prompt {
    fn ask(&mut self, message: &str) -> InputResult<String>;
}

/// Interactive terminal prompts.
pub struct InquirePrompt;

impl Prompt for InquirePrompt {
    fn ask(&mut self, message: &str) -> InputResult<String> {
        Ok(Text::new(message).prompt()?)
    }
}

/// Plain line based prompts for piped input.
pub struct LinePrompt<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn ask(&mut self, message: &str) -> InputResult<String> {
        write!(self.writer, "{} ", message)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(InvoiceError::EndOfInput);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// A confirmed work type dropped because its hours did not parse.
#[derive(Debug, PartialEq, Clone)]
pub struct SkippedItem {
    pub work_type: String,
    pub input: String,
}

impl fmt::Display for SkippedItem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} (hours {:?})", self.work_type, self.input)
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Collection {
    pub record: InvoiceRecord,
    pub skipped: Vec<SkippedItem>,
}

/// Only a literal "yes", in any case, confirms.
pub fn is_affirmative(answer: &str) -> bool {
    answer.eq_ignore_ascii_case(AFFIRMATIVE)
}

pub fn collect(
    prompt: &mut impl Prompt,
    rates: &RateTable,
) -> InputResult<Collection> {
    let customer_name = prompt.ask("Enter customer name:")?;
    let customer_address = prompt.ask("Enter customer address:")?;
    let invoice_date = prompt.ask("Enter invoice date (YYYY-MM-DD):")?;
    let book_title = prompt.ask("Enter the title of the book:")?;

    let mut items = Vec::new();
    let mut skipped = Vec::new();

    for (work_type, rate) in rates.iter() {
        let performed = prompt.ask(&format!("Did you perform: {}?", work_type))?;
        if !is_affirmative(&performed) {
            continue;
        }

        let input = prompt.ask("Enter hours:")?;
        match parse_hours(&input) {
            Some(hours) => {
                let item = LineItem::new(work_type, hours, rate);
                info!(%item, "collected line item");
                items.push(item);
            }
            None => {
                println!(
                    "Invalid input for hours. Please enter a numeric value."
                );
                warn!(work_type, input = input.as_str(), "skipping line item");
                skipped.push(SkippedItem {
                    work_type: work_type.to_string(),
                    input,
                });
            }
        }
    }

    Ok(Collection {
        record: InvoiceRecord {
            customer_name,
            customer_address,
            invoice_date,
            book_title,
            items,
        },
        skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::billing::Money;
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::io::{self, Cursor};

    fn scripted(answers: &[&str]) -> LinePrompt<Cursor<Vec<u8>>, io::Sink> {
        let mut script = answers.join("\n");
        script.push('\n');
        LinePrompt::new(Cursor::new(script.into_bytes()), io::sink())
    }

    const HEADER: [&str; 4] =
        ["Jane Doe", "1 Main St", "2024-03-01", "Sample Title"];

    fn with_header<'a>(rest: &[&'a str]) -> Vec<&'a str> {
        HEADER.iter().copied().chain(rest.iter().copied()).collect()
    }

    #[test]
    fn affirmative_answers() {
        for yes in ["yes", "YES", "Yes", "yEs"] {
            assert!(is_affirmative(yes), "{:?}", yes);
        }
        for no in ["y", "no", "", "true", "yess", " yes", "yes "] {
            assert!(!is_affirmative(no), "{:?}", no);
        }
    }

    #[test]
    fn header_is_verbatim() -> Result<(), InvoiceError> {
        let mut prompt = scripted(&[
            "Jane Doe",
            "",
            "not a date",
            "Sample Title",
            "no",
            "no",
            "no",
        ]);
        let collection = collect(&mut prompt, &RateTable::audiobook())?;

        assert_eq!(collection.record.customer_name, "Jane Doe");
        assert_eq!(collection.record.customer_address, "");
        assert_eq!(collection.record.invoice_date, "not a date");
        assert!(collection.record.items.is_empty());
        assert!(collection.skipped.is_empty());
        Ok(())
    }

    #[test]
    fn single_confirmed_item() -> Result<(), InvoiceError> {
        let mut prompt = scripted(&with_header(&["yes", "2", "no", "no"]));
        let collection = collect(&mut prompt, &RateTable::audiobook())?;

        assert_eq!(
            collection.record.items,
            vec![LineItem::new(
                "audiobook editing",
                dec!(2),
                Money::new(dec!(50))
            )]
        );
        assert_eq!(collection.record.grand_total().to_string(), "$100.00");
        Ok(())
    }

    #[test]
    fn unparsable_hours_drop_only_that_item() -> Result<(), InvoiceError> {
        let mut prompt =
            scripted(&with_header(&["YES", "abc", "Yes", "1.5", "y"]));
        let collection = collect(&mut prompt, &RateTable::audiobook())?;

        let types: Vec<&str> = collection
            .record
            .items
            .iter()
            .map(|i| i.work_type.as_str())
            .collect();
        assert_eq!(types, vec!["audiobook proofing"]);
        assert_eq!(
            collection.skipped,
            vec![SkippedItem {
                work_type: "audiobook editing".to_string(),
                input: "abc".to_string(),
            }]
        );
        assert_eq!(
            collection.skipped[0].to_string(),
            "audiobook editing (hours \"abc\")"
        );
        Ok(())
    }

    #[test]
    fn padded_yes_declines() -> Result<(), InvoiceError> {
        let mut prompt =
            scripted(&with_header(&[" yes ", "yes\t", "Yes", "2"]));
        let collection = collect(&mut prompt, &RateTable::audiobook())?;

        let types: Vec<&str> = collection
            .record
            .items
            .iter()
            .map(|i| i.work_type.as_str())
            .collect();
        assert_eq!(types, vec!["extra editing"]);
        assert!(collection.skipped.is_empty());
        Ok(())
    }

    #[test]
    fn end_of_input_is_fatal() {
        let mut prompt = scripted(&["Jane Doe", "1 Main St"]);
        let result = collect(&mut prompt, &RateTable::audiobook());
        assert!(matches!(result, Err(InvoiceError::EndOfInput)));
    }

    #[test]
    fn line_prompt_writes_question() -> Result<(), InvoiceError> {
        let mut out = Vec::new();
        let mut prompt =
            LinePrompt::new(Cursor::new(b"answer\r\n".to_vec()), &mut out);
        assert_eq!(prompt.ask("Question?")?, "answer");
        assert_eq!(out, b"Question? ");
        Ok(())
    }

    fn arb_answer() -> impl Strategy<Value = (bool, String)> {
        let hours = prop_oneof![
            (0u32..10_000u32).prop_map(|h| format!("{}", Decimal::new(h.into(), 2))),
            Just("abc".to_string()),
            Just("-3".to_string()),
            Just("".to_string()),
        ];
        (any::<bool>(), hours)
    }

    proptest! {
        #[test]
        fn items_follow_affirmed_parsable_answers(
            answers in prop::collection::vec(arb_answer(), 3)
        ) {
            let rates = RateTable::audiobook();
            let mut script: Vec<String> =
                HEADER.iter().map(|s| s.to_string()).collect();
            for (affirm, hours) in answers.iter() {
                if *affirm {
                    script.push("yes".to_string());
                    script.push(hours.clone());
                } else {
                    script.push("no".to_string());
                }
            }
            let refs: Vec<&str> = script.iter().map(String::as_str).collect();
            let collection = collect(&mut scripted(&refs), &rates).unwrap();

            let expected: Vec<LineItem> = rates
                .iter()
                .zip(answers.iter())
                .filter(|(_, (affirm, _))| *affirm)
                .filter_map(|((name, rate), (_, hours))| {
                    parse_hours(hours).map(|h| LineItem::new(name, h, rate))
                })
                .collect();
            let expected_total = expected
                .iter()
                .fold(Money::zero(), |acc, i| acc + i.total);

            prop_assert_eq!(collection.record.grand_total(), expected_total);
            prop_assert_eq!(&collection.record.items, &expected);
            prop_assert_eq!(
                collection.record.items.len() + collection.skipped.len(),
                answers.iter().filter(|(affirm, _)| *affirm).count()
            );
        }
    }
}
