//! Fixed-schema RSS parsing.
//!
//! The feed is expected to be an RSS document: a root element with a single
//! `channel` child holding `item` children. Only `title`, `link`,
//! `description` and `pubDate` are read from each item; everything else is
//! skipped. This is deliberately not a general feed parser — there is no
//! Atom support and no format detection.

use chrono::{DateTime, FixedOffset};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::app::{NewsgenError, Result};
use crate::domain::FeedItem;

/// Title substituted when an item has no usable title.
pub const UNTITLED: &str = "Untitled";

/// Parse a feed document into normalized items, newest first, at most
/// `max_items` of them.
///
/// A well-formed document without a `channel` element is an empty feed,
/// not an error. Malformed XML is fatal. Items whose `pubDate` is missing
/// or not valid RFC 2822 are stamped with `generated_at` instead of being
/// dropped; passing the timestamp in keeps a whole run deterministic for
/// a fixed input.
pub fn parse_feed(
    xml: &str,
    generated_at: DateTime<FixedOffset>,
    max_items: usize,
) -> Result<Vec<FeedItem>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().expand_empty_elements = true;

    let mut items = Vec::new();
    let mut saw_root = false;

    loop {
        match read_event(&mut reader)? {
            Event::Start(_) => {
                saw_root = true;
                read_root(&mut reader, generated_at, &mut items)?;
                read_epilog(&mut reader)?;
                break;
            }
            Event::Text(t) => {
                let text = t.unescape().map_err(parse_err)?;
                if !text.trim().is_empty() {
                    return Err(NewsgenError::Parse("text outside of root element".into()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !saw_root {
        return Err(NewsgenError::Parse("no root element in feed document".into()));
    }

    // Newest first; the sort is stable so equal dates keep feed order.
    items.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    items.truncate(max_items);
    Ok(items)
}

/// After the root element closes, only whitespace, comments and
/// processing instructions may follow. A second element or stray text
/// makes the document malformed.
fn read_epilog(reader: &mut Reader<&[u8]>) -> Result<()> {
    loop {
        match read_event(reader)? {
            Event::Start(_) | Event::Empty(_) | Event::CData(_) => {
                return Err(NewsgenError::Parse("content after root element".into()))
            }
            Event::Text(t) => {
                if !t.unescape().map_err(parse_err)?.trim().is_empty() {
                    return Err(NewsgenError::Parse("content after root element".into()));
                }
            }
            Event::Eof => return Ok(()),
            _ => {}
        }
    }
}

/// Children of the root element. Only the first `channel` is read.
fn read_root(
    reader: &mut Reader<&[u8]>,
    generated_at: DateTime<FixedOffset>,
    items: &mut Vec<FeedItem>,
) -> Result<()> {
    let mut found_channel = false;
    loop {
        match read_event(reader)? {
            Event::Start(e) => {
                if !found_channel && e.name().as_ref() == b"channel" {
                    found_channel = true;
                    read_channel(reader, generated_at, items)?;
                } else {
                    skip_element(reader, &e)?;
                }
            }
            Event::End(_) => return Ok(()),
            Event::Eof => return Err(truncated()),
            _ => {}
        }
    }
}

fn read_channel(
    reader: &mut Reader<&[u8]>,
    generated_at: DateTime<FixedOffset>,
    items: &mut Vec<FeedItem>,
) -> Result<()> {
    loop {
        match read_event(reader)? {
            Event::Start(e) => {
                if e.name().as_ref() == b"item" {
                    items.push(read_item(reader, generated_at)?);
                } else {
                    skip_element(reader, &e)?;
                }
            }
            Event::End(_) => return Ok(()),
            Event::Eof => return Err(truncated()),
            _ => {}
        }
    }
}

fn read_item(
    reader: &mut Reader<&[u8]>,
    generated_at: DateTime<FixedOffset>,
) -> Result<FeedItem> {
    let mut title = String::new();
    let mut link = String::new();
    let mut description = String::new();
    let mut pub_date = String::new();

    loop {
        match read_event(reader)? {
            Event::Start(e) => match e.name().as_ref() {
                b"title" => title = read_text(reader)?,
                b"link" => link = read_text(reader)?,
                b"description" => description = read_text(reader)?,
                b"pubDate" => pub_date = read_text(reader)?,
                _ => skip_element(reader, &e)?,
            },
            Event::End(_) => break,
            Event::Eof => return Err(truncated()),
            _ => {}
        }
    }

    let title = title.trim();
    let published_at =
        DateTime::parse_from_rfc2822(pub_date.trim()).unwrap_or(generated_at);

    Ok(FeedItem {
        title: if title.is_empty() {
            UNTITLED.to_string()
        } else {
            title.to_string()
        },
        link: link.trim().to_string(),
        description: description.trim().to_string(),
        published_at,
    })
}

/// Text content of the current element: character data plus CDATA, with
/// entities decoded. Nested elements are skipped rather than flattened.
fn read_text(reader: &mut Reader<&[u8]>) -> Result<String> {
    let mut text = String::new();
    loop {
        match read_event(reader)? {
            Event::Text(t) => text.push_str(&t.unescape().map_err(parse_err)?),
            Event::CData(c) => text.push_str(&String::from_utf8_lossy(&c.into_inner())),
            Event::Start(e) => skip_element(reader, &e)?,
            Event::End(_) => return Ok(text),
            Event::Eof => return Err(truncated()),
            _ => {}
        }
    }
}

fn skip_element(reader: &mut Reader<&[u8]>, start: &BytesStart<'_>) -> Result<()> {
    reader
        .read_to_end(start.name())
        .map_err(parse_err)
        .map(|_| ())
}

fn read_event<'a>(reader: &mut Reader<&'a [u8]>) -> Result<Event<'a>> {
    reader.read_event().map_err(parse_err)
}

fn parse_err(e: impl std::fmt::Display) -> NewsgenError {
    NewsgenError::Parse(e.to_string())
}

fn truncated() -> NewsgenError {
    NewsgenError::Parse("unexpected end of feed document".into())
}
