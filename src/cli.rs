use clap::Parser;

/// Build an audiobook invoice spreadsheet from a few questions.
///
/// The biller is read from NAME, ADDRESS, CITY_STATE_ZIP and SOCIAL_HANDLE,
/// either in the environment or a .env file. INVOICE_NUMBER_PREFIX and
/// INVOICE_OUTPUT_DIR are optional.
#[derive(Parser)]
#[clap(version)]
pub struct Opts {}
