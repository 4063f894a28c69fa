//! ui::table
//!
//! Table rendering for service records, using comfy-table's full UTF-8 grid.

use chrono::{DateTime, Local};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};

use crate::remote::{from_epoch_millis, CallLog, Contact, SmsMessage};

/// Timestamp layout for date columns.
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn new_table<const N: usize>(headers: [&str; N]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers);
    table
}

fn format_date(dt: Option<DateTime<Local>>) -> String {
    dt.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// `Name | Number`
pub fn contacts(rows: &[Contact]) -> Table {
    let mut table = new_table(["Name", "Number"]);
    for contact in rows {
        table.add_row(vec![contact.name.as_str(), contact.number.as_str()]);
    }
    table
}

/// `Address | Content | Date Received | Date Sent`
pub fn sms(rows: &[SmsMessage]) -> Table {
    let mut table = new_table(["Address", "Content", "Date Received", "Date Sent"]);
    for msg in rows {
        table.add_row(vec![
            msg.address.clone(),
            msg.content.clone(),
            format_date(from_epoch_millis(msg.date)),
            format_date(from_epoch_millis(msg.sent)),
        ]);
    }
    table
}

/// `Name | Number | Date | Duration`
pub fn call_logs(rows: &[CallLog]) -> Table {
    let mut table = new_table(["Name", "Number", "Date", "Duration"]);
    for log in rows {
        table.add_row(vec![
            log.name.clone(),
            log.number.clone(),
            format_date(from_epoch_millis(log.date)),
            format!("{}s", log.duration),
        ]);
    }
    table
}
