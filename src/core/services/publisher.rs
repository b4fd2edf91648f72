//! Comment delivery
//!
//! Decides which comments to create, update or delete for a comment mode.
//! All host access goes through the [`ReviewHost`] port.

use crate::core::models::CommentMode;
use crate::core::ports::{ReviewComment, ReviewHost};

/// Post `body` on pull request `pr` according to `mode`
///
/// Earlier comments are recognized by `header`, the first line of every
/// comment this tool posts.
pub fn publish_comment(
    host: &dyn ReviewHost,
    pr: u64,
    body: &str,
    header: &str,
    mode: CommentMode,
) -> anyhow::Result<()> {
    match mode {
        CommentMode::Insert => host.create_comment(pr, body),
        CommentMode::Update => {
            let mut existing = host.find_comments(pr, header)?;
            let last = existing.pop();
            delete_all(host, &existing)?;
            match last {
                Some(comment) => {
                    log::debug!("updating comment {}", comment.id);
                    host.update_comment(comment.id, body)
                },
                None => host.create_comment(pr, body),
            }
        },
        CommentMode::Replace => {
            let existing = host.find_comments(pr, header)?;
            delete_all(host, &existing)?;
            host.create_comment(pr, body)
        },
    }
}

fn delete_all(host: &dyn ReviewHost, comments: &[ReviewComment]) -> anyhow::Result<()> {
    for comment in comments {
        log::debug!("deleting comment {}", comment.id);
        host.delete_comment(comment.id)?;
    }
    Ok(())
}
