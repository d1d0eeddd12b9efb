//! Fixed-layout plain-text payslip statement

use itertools::Itertools;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::aggregate::Section;
use crate::config::PayslipConfig;
use crate::payslip::Payslip;

const COLUMN_GAP: &str = " | ";

/// Format an amount with two decimals and Indian digit grouping
///
/// Rounding to paise happens here only; stored amounts keep full precision.
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{rounded:.2}");
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits, "00"));
    let sign = if integer.chars().all(|c| c == '0') && fraction.chars().all(|c| c == '0') {
        ""
    } else {
        sign
    };
    format!("{sign}{}.{fraction}", group_indian(integer))
}

/// "1234567" -> "12,34,567"
fn group_indian(integer: &str) -> String {
    if integer.len() <= 3 {
        return integer.to_string();
    }
    let (head, last_three) = integer.split_at(integer.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    groups.push(last_three);
    groups.join(",")
}

struct Column<'a> {
    heading: &'static str,
    total_label: &'static str,
    section: &'a Section,
}

impl Column<'_> {
    /// (label, amount) cells: one per line, then the total
    fn cells(&self) -> Vec<(String, String)> {
        self.section
            .entries
            .iter()
            .map(|e| (format!("{}:", e.label()), format_amount(e.amount)))
            .chain(std::iter::once((
                format!("{}:", self.total_label),
                format_amount(self.section.total),
            )))
            .collect()
    }
}

fn pad_cell(label: &str, amount: &str, width: usize) -> String {
    let gap = width.saturating_sub(label.chars().count() + amount.chars().count()).max(1);
    format!("{label}{}{amount}", " ".repeat(gap))
}

fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let left = (width - len) / 2;
    format!("{}{text}{}", " ".repeat(left), " ".repeat(width - len - left))
}

/// Render `payslip` as a fixed-layout text statement
#[must_use]
pub fn render_text(payslip: &Payslip, config: &PayslipConfig) -> String {
    let period = payslip.period;
    let placeholder = config.not_available.as_str();

    let columns = [
        Column {
            heading: "Emoluments",
            total_label: "Total Emoluments",
            section: &payslip.sections.emoluments,
        },
        Column {
            heading: "Govt. Recoveries",
            total_label: "Total Govt. Recov.",
            section: &payslip.sections.govt_recoveries,
        },
        Column {
            heading: "Non Govt. Recoveries",
            total_label: "Total Non-Govt. Recov.",
            section: &payslip.sections.non_govt_recoveries,
        },
    ];
    let cells: Vec<Vec<(String, String)>> = columns.iter().map(Column::cells).collect();
    let widths: Vec<usize> = columns
        .iter()
        .zip(&cells)
        .map(|(column, cells)| {
            cells
                .iter()
                .map(|(l, a)| l.chars().count() + 1 + a.chars().count())
                .chain(std::iter::once(column.heading.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();
    let full_width = widths.iter().sum::<usize>() + COLUMN_GAP.len() * (widths.len() - 1);
    let rule = "-".repeat(full_width);

    let mut lines: Vec<String> = vec![
        center(&config.app_title, full_width),
        center(
            &format!(
                "PAYSLIP of {}-{}",
                period.month_name().to_uppercase(),
                period.year
            ),
            full_width,
        ),
    ];

    let header_lines: Vec<String> = payslip
        .header_fields
        .iter()
        .map(|h| format!("{}: {}", h.label, h.display(placeholder)))
        .collect();
    let half = full_width.saturating_sub(COLUMN_GAP.len()) / 2;
    let salary_month = format!("{:>full_width$}", format!("Salary Month: {period}"));
    for (i, pair) in header_lines.iter().chunks(2).into_iter().enumerate() {
        let line = pair.map(|s| format!("{s:<half$}")).join("   ");
        lines.push(line.trim_end().to_string());
        if i == 0 {
            lines.push(salary_month.clone());
        }
    }
    if header_lines.is_empty() {
        lines.push(salary_month);
    }

    lines.push(rule.clone());
    let headings = columns
        .iter()
        .zip(&widths)
        .map(|(c, w)| center(c.heading, *w))
        .join(COLUMN_GAP);
    lines.push(headings.trim_end().to_string());

    for row in 0..payslip.sections.max_rows() {
        let line = cells
            .iter()
            .zip(&widths)
            .map(|(column_cells, width)| {
                // the last cell of each column is its total
                match column_cells.get(row).filter(|_| row + 1 < column_cells.len()) {
                    Some((label, amount)) => pad_cell(label, amount, *width),
                    None => " ".repeat(*width),
                }
            })
            .join(COLUMN_GAP);
        lines.push(line.trim_end().to_string());
    }

    lines.push(rule.clone());
    let totals = cells
        .iter()
        .zip(&widths)
        .map(|(column_cells, width)| match column_cells.last() {
            Some((label, amount)) => pad_cell(label, amount, *width),
            None => " ".repeat(*width),
        })
        .join(COLUMN_GAP);
    lines.push(totals.trim_end().to_string());
    lines.push(rule);

    lines.push(center(
        &format!("Net Pay: {}", format_amount(payslip.net_pay)),
        full_width,
    ));
    lines.push(center(
        &format!("({} Rs. Only.)", payslip.net_pay_words),
        full_width,
    ));
    lines.push(center(&config.footer, full_width));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
