//! CSV exports for the admin back office

use shared::models::{Address, Order, OrderType};
use std::fs;
use std::path::{Path, PathBuf};

pub const REDEMPTION_EXPORT_FILE: &str = "shop_redemption_orders.csv";

const LOTTERY_HEADER: [&str; 7] = ["订单ID", "奖品名称", "中奖用户", "收货人", "电话", "地址", "中奖时间"];

const REDEMPTION_HEADER: [&str; 7] = ["订单ID", "商品名称", "消耗豆子", "收货人", "电话", "状态", "兑换时间"];

pub fn lottery_export_file(activity_id: &str) -> String {
    format!("lottery_records_{}.csv", activity_id)
}

fn csv_escape(value: &str) -> String {
    if value.contains(['\n', '\r', '"', ',']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn to_csv_line(values: &[&str]) -> String {
    values.iter().map(|v| csv_escape(v)).collect::<Vec<String>>().join(",")
}

fn address_fields(address: Option<&Address>) -> (&str, &str, &str) {
    match address {
        Some(a) => (a.name.as_str(), a.phone.as_str(), a.address.as_str()),
        None => ("", "", ""),
    }
}

/// Lottery prize orders, one line per order
pub fn lottery_records_csv(orders: &[Order]) -> String {
    let mut lines = vec![to_csv_line(&LOTTERY_HEADER)];
    for o in orders.iter().filter(|o| o.kind == OrderType::Lottery) {
        let (name, phone, address) = address_fields(o.address.as_ref());
        lines.push(to_csv_line(&[
            o.id.as_str(),
            o.product_name.as_str(),
            o.user_id.as_str(),
            name,
            phone,
            address,
            o.time.as_str(),
        ]));
    }
    lines.join("\n")
}

/// Everything except lottery prizes
pub fn redemption_orders_csv(orders: &[Order]) -> String {
    let mut lines = vec![to_csv_line(&REDEMPTION_HEADER)];
    for o in orders.iter().filter(|o| o.kind != OrderType::Lottery) {
        let (name, phone, _) = address_fields(o.address.as_ref());
        let amount = o.amount.to_string();
        lines.push(to_csv_line(&[
            o.id.as_str(),
            o.product_name.as_str(),
            amount.as_str(),
            name,
            phone,
            o.status.as_str(),
            o.time.as_str(),
        ]));
    }
    lines.join("\n")
}

/// Write both exports into `dir`, returning the written paths
pub fn write_exports(
    dir: impl AsRef<Path>,
    activity_id: &str,
    orders: &[Order],
) -> std::io::Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let lottery = dir.join(lottery_export_file(activity_id));
    fs::write(&lottery, lottery_records_csv(orders) + "\n")?;

    let redemption = dir.join(REDEMPTION_EXPORT_FILE);
    fs::write(&redemption, redemption_orders_csv(orders) + "\n")?;

    Ok(vec![lottery, redemption])
}
