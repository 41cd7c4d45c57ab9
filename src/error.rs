use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InvoiceError {
    #[error("IO Error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    #[error("Error writing spreadsheet: {source}")]
    Spreadsheet {
        #[from]
        source: rust_xlsxwriter::XlsxError,
    },

    #[error("Input Error: {source}")]
    Input {
        #[from]
        source: inquire::error::InquireError,
    },

    #[error("Configuration Error: {source}")]
    Config {
        #[from]
        source: envy::Error,
    },

    #[error("Input ended before the invoice was complete")]
    EndOfInput,
}
