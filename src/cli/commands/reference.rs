//! Reference commands - books, book, chapter, verse

use anyhow::Result;
use serde::Serialize;

use crate::cli::Context;
use crate::core::types::{Book, BookNumber, VerseRef};
use crate::ui::output;

#[derive(Serialize)]
struct BookList {
    count: usize,
    items: Vec<Book>,
}

#[derive(Serialize)]
struct BookDetail {
    #[serde(flatten)]
    book: Book,
    chapters: u32,
}

#[derive(Serialize)]
struct ChapterDetail {
    book_id: u32,
    chapter: u32,
    verse_count: u32,
}

#[derive(Serialize)]
struct VerseDetail {
    text: String,
}

/// List all books of the active text module.
pub fn books(ctx: &Context) -> Result<()> {
    let items = ctx.app.store.books()?;

    if ctx.json {
        return output::json(&BookList {
            count: items.len(),
            items,
        });
    }
    for book in &items {
        output::print(
            format!(
                "{:>4}  {:<10} {}",
                book.number.get(),
                book.short_name,
                book.long_name
            ),
            ctx.verbosity,
        );
    }
    Ok(())
}

/// Show one book and its chapter count.
pub fn book(ctx: &Context, number: u32) -> Result<()> {
    let number = BookNumber::new(number)?;
    let book = ctx.app.store.book(number)?;
    let chapters = ctx.app.store.book_chapter_count(number)?;

    if ctx.json {
        return output::json(&BookDetail { book, chapters });
    }
    output::print(
        format!(
            "{} ({}), book {}: {} chapters",
            book.long_name, book.short_name, book.number, chapters
        ),
        ctx.verbosity,
    );
    Ok(())
}

/// Show one chapter's verse count.
pub fn chapter(ctx: &Context, book: u32, chapter: u32) -> Result<()> {
    let number = BookNumber::new(book)?;
    let verse_count = ctx.app.store.chapter_verse_count(number, chapter)?;

    if ctx.json {
        return output::json(&ChapterDetail {
            book_id: number.get(),
            chapter,
            verse_count,
        });
    }
    output::print(
        format!("{}:{} has {} verses", number, chapter, verse_count),
        ctx.verbosity,
    );
    Ok(())
}

/// Print one verse's text.
pub fn verse(ctx: &Context, book: u32, chapter: u32, verse: u32) -> Result<()> {
    let number = BookNumber::new(book)?;
    let reference = VerseRef::new(number, chapter, verse);
    let text = ctx.app.store.verse_text(&reference)?;

    if ctx.json {
        return output::json(&VerseDetail { text });
    }
    output::print(text, ctx.verbosity);
    Ok(())
}
