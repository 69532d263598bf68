//! Console rendering for `blogspace posts`.

use blogspace_types::Post;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::io::Write;

pub fn print_posts(posts: &[Post]) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    let color = stdout.is_terminal();
    write_posts(&mut stdout, posts, color)
}

fn write_posts(out: &mut impl Write, posts: &[Post], color: bool) -> std::io::Result<()> {
    if posts.is_empty() {
        writeln!(out, "No blogs yet. Be the first to write one!")?;
        return Ok(());
    }

    if color {
        writeln!(out, "{}", format!("Latest Blogs ({} posts)", posts.len()).bold())?;
    } else {
        writeln!(out, "Latest Blogs ({} posts)", posts.len())?;
    }
    writeln!(out)?;

    for post in posts {
        if color {
            writeln!(out, "{}", post.title.bold().cyan())?;
            writeln!(out, "{}", format!("By {}", post.author_name()).dimmed())?;
        } else {
            writeln!(out, "{}", post.title)?;
            writeln!(out, "By {}", post.author_name())?;
        }
        writeln!(out, "{}", post.preview())?;
        writeln!(out)?;
    }

    Ok(())
}
