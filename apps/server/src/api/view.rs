use std::fmt::Write as _;
use std::sync::Arc;

use crate::{main_lib::AppState, models::Crypto};
use axum::{extract::State, response::Html};

pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let records = state.coin_board_service.list().await;
    let status = state.coin_board_service.status().await;
    let refreshed = status
        .refreshed_at
        .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "never".to_string());

    let cryptos: Vec<Crypto> = records.into_iter().map(Crypto::from).collect();
    Html(render_index(&cryptos, &refreshed))
}

fn render_index(cryptos: &[Crypto], refreshed: &str) -> String {
    let mut rows = String::new();
    for c in cryptos {
        let class = if c.change.starts_with('-') {
            "down"
        } else {
            "up"
        };
        // Writing to a String cannot fail.
        let _ = write!(
            rows,
            "<tr><td>{}</td><td>{}</td><td>${:.2}</td><td class=\"{}\">{}</td></tr>",
            escape_html(&c.name),
            escape_html(&c.symbol),
            c.price,
            class,
            escape_html(&c.change),
        );
    }
    if cryptos.is_empty() {
        rows.push_str(
            "<tr><td colspan=\"4\">No data yet. <a href=\"/api/cryptos/fetch\">Fetch prices</a></td></tr>",
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Crypto Prices</title>
<link rel="stylesheet" href="/static/style.css">
</head>
<body>
<h1>Crypto Prices</h1>
<p class="updated">Last updated: {refreshed}</p>
<table>
<thead><tr><th>Name</th><th>Symbol</th><th>Price (USD)</th><th>24h Change</th></tr></thead>
<tbody>{rows}</tbody>
</table>
<p><a href="/api/cryptos/download">Download CSV</a></p>
</body>
</html>
"#,
        refreshed = escape_html(refreshed),
        rows = rows,
    )
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
