//! Inline styles shared by the view functions.

pub const CARD: &str = "background:#fff;border-radius:8px;box-shadow:0 1px 4px rgba(0,0,0,0.15);padding:16px 24px;margin-top:24px;";

pub const ROW: &str = "display:flex;flex-wrap:wrap;gap:16px;align-items:flex-end;";

pub const FIELD: &str = "display:flex;flex-direction:column;min-width:200px;flex:1;";

pub const HINT: &str = "font-size:12px;color:#666;margin-top:2px;";

pub const WARNING_HINT: &str = "font-size:12px;color:#ed6c02;margin-top:2px;";

pub const RAW_JSON: &str = "background:#f5f5f5;padding:16px;border-radius:8px;max-height:250px;overflow:auto;font-size:13px;";

pub const DIRTY_DOT: &str = "display:inline-block;width:8px;height:8px;margin-left:8px;background:#e53935;border-radius:50%;vertical-align:middle;";

pub fn alert(severity: &str) -> String {
    let (background, color) = match severity {
        "error" => ("#fdeded", "#5f2120"),
        "success" => ("#edf7ed", "#1e4620"),
        _ => ("#fff4e5", "#663c00"),
    };
    format!(
        "background:{};color:{};padding:8px 16px;border-radius:4px;margin-top:12px;",
        background, color
    )
}

pub fn result_card(eligible: bool) -> String {
    let background = if eligible { "#e8f5e9" } else { "#ffebee" };
    format!("background:{};border-radius:8px;padding:16px;margin-top:12px;", background)
}
