//! Network control surface
//!
//! Transport independent request handling: the HTTP server resolves the
//! method and request target, this module decides the response and updates
//! the mode selector.

use core::fmt::{self, Write};

use heapless::String;
use log::info;

use crate::mode::{ModeId, ModeSelector};

/// Capacity of the rendered control page
pub const PAGE_CAPACITY: usize = 2048;

/// Longest query string accepted by the mode route
pub const MAX_QUERY_LEN: usize = 31;

/// Longest `m` value accepted by the mode route
pub const MAX_PARAM_LEN: usize = 9;

const MODE_PARAM: &str = "m";
const INDEX_PATH: &str = "/";
const MODE_PATH: &str = "/mode";

const PAGE_HEAD: &str = "<html><head><meta name='viewport' content='width=device-width, initial-scale=1'>\
<style>body{font-family:sans-serif; text-align:center; background:#1a1a1a; color:white;}\
.btn{display:block; width:80%; margin:10px auto; padding:15px; font-size:1rem; border:none; border-radius:10px; color:white; cursor:pointer; text-decoration:none;}\
.rainbow{background: linear-gradient(to right, red, orange, yellow, green, blue, indigo, violet);}\
.gold{background: #E4B429; color:black;} .purple{background: #9d4edd;} .orange{background: #ff8c42;}\
.xmas{background: linear-gradient(to right, #ff0000, #00ff00, #ff0000, #00ff00);} .newyear{background: linear-gradient(to right, gold, silver, gold);}\
.collision{background: linear-gradient(to right, #ff00ff, #00ffff);}</style></head>\
<body><h1>LED Control</h1>";
const PAGE_TAIL: &str = "</body></html>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// What the transport should send back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlResponse {
    /// 200 with the control page
    Page,
    /// 303 to the given location
    SeeOther(&'static str),
    /// 404
    NotFound,
}

impl ControlResponse {
    pub const fn status(self) -> u16 {
        match self {
            Self::Page => 200,
            Self::SeeOther(_) => 303,
            Self::NotFound => 404,
        }
    }

    pub const fn reason(self) -> &'static str {
        match self {
            Self::Page => "OK",
            Self::SeeOther(_) => "See Other",
            Self::NotFound => "Not Found",
        }
    }
}

/// Request handler bound to the shared mode selector
#[derive(Clone, Copy)]
pub struct ControlSurface<'a> {
    selector: &'a ModeSelector,
}

impl<'a> ControlSurface<'a> {
    pub const fn new(selector: &'a ModeSelector) -> Self {
        Self { selector }
    }

    /// Route a request
    ///
    /// `target` is the request target as sent by the client, path with an
    /// optional query string.
    pub fn handle(&self, method: HttpMethod, target: &str) -> ControlResponse {
        let (path, query) = split_target(target);
        match (method, path) {
            (HttpMethod::Get, INDEX_PATH) => ControlResponse::Page,
            (HttpMethod::Get, MODE_PATH) => {
                if let Some(mode) = query.and_then(mode_from_query) {
                    info!("switching to mode {}", mode);
                    self.selector.set(mode);
                }
                ControlResponse::SeeOther(INDEX_PATH)
            }
            _ => ControlResponse::NotFound,
        }
    }
}

fn split_target(target: &str) -> (&str, Option<&str>) {
    match target.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (target, None),
    }
}

/// Extract the mode value from a query string
///
/// Oversized queries and values are ignored.
pub fn mode_from_query(query: &str) -> Option<i32> {
    if query.len() > MAX_QUERY_LEN {
        return None;
    }
    let value = query_value(query, MODE_PARAM)?;
    if value.len() > MAX_PARAM_LEN {
        return None;
    }
    Some(parse_leading_int(value))
}

/// Find the value of `key` in an `a=1&b=2` query string
pub fn query_value<'q>(query: &'q str, key: &str) -> Option<&'q str> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(name, _)| *name == key)
        .map(|(_, value)| value)
}

/// Lenient integer parsing
///
/// Skips leading whitespace, accepts one sign and reads digits up to the
/// first non-digit. Input without digits yields 0, overflow saturates.
pub fn parse_leading_int(input: &str) -> i32 {
    let trimmed = input.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, digit| {
            (acc * 10 + i64::from(digit - b'0')).min(i64::from(i32::MAX) + 1)
        });
    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value).unwrap_or(if negative { i32::MIN } else { i32::MAX })
}

/// CSS class or inline style of a mode button
const fn button_style(mode: ModeId) -> (&'static str, Option<&'static str>) {
    match mode {
        ModeId::RainbowChase => ("btn rainbow", None),
        ModeId::WaterlooChase => ("btn gold", None),
        ModeId::Breathing => ("btn purple", None),
        ModeId::Sparkle => ("btn orange", None),
        ModeId::Fire => ("btn", Some("background:#ff6600;")),
        ModeId::NeonStripes => ("btn", Some("background:linear-gradient(to right, cyan, magenta);")),
        ModeId::Lightning => ("btn", Some("background:#ffff00; color:black;")),
        ModeId::Christmas => ("btn xmas", None),
        ModeId::NewYear => ("btn newyear", None),
        ModeId::CollisionFireworks => ("btn collision", None),
        ModeId::Off => ("btn", Some("background:#444;")),
    }
}

/// Write the control page listing every mode
pub fn write_page<W: Write>(out: &mut W) -> fmt::Result {
    out.write_str(PAGE_HEAD)?;
    for mode in ModeId::CATALOG {
        let (class, style) = button_style(mode);
        write!(out, "<a href='{}?{}={}' class='{}'", MODE_PATH, MODE_PARAM, mode.raw(), class)?;
        if let Some(style) = style {
            write!(out, " style='{}'", style)?;
        }
        write!(out, ">{}</a>", mode.label())?;
    }
    out.write_str(PAGE_TAIL)
}

/// Render the control page into a fixed-capacity buffer
pub fn render_page() -> Result<String<PAGE_CAPACITY>, fmt::Error> {
    let mut page = String::new();
    write_page(&mut page)?;
    Ok(page)
}
