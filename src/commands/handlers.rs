//! Command handlers.
//!
//! Every handler takes the positional arguments and the shared
//! [`CommandContext`] and returns the reply text or a [`CommandError`].
//! Extra arguments are ignored.

use super::CommandContext;
use crate::domain::Phone;
use crate::error::{CommandError, CommandResult};
use crate::models::Record;
use tracing::info;

/// Take the first `N` arguments or report what is missing.
fn require<'a, const N: usize>(
    args: &[&'a str],
    needs: &'static str,
) -> CommandResult<[&'a str; N]> {
    match args.get(..N) {
        Some(head) => {
            let mut out = [""; N];
            out.copy_from_slice(head);
            Ok(out)
        }
        None => Err(CommandError::Arity { needs }),
    }
}

fn find<'b>(ctx: &'b CommandContext<'_>, name: &str) -> CommandResult<&'b Record> {
    ctx.book
        .find(name)
        .ok_or_else(|| CommandError::NotFound(name.to_string()))
}

fn find_mut<'b>(ctx: &'b mut CommandContext<'_>, name: &str) -> CommandResult<&'b mut Record> {
    ctx.book
        .find_mut(name)
        .ok_or_else(|| CommandError::NotFound(name.to_string()))
}

/// `hello`: a greeting.
pub fn hello(_args: &[&str], _ctx: &mut CommandContext<'_>) -> CommandResult<String> {
    Ok("How can I help you?".to_string())
}

/// `add <name> <phone>`: create the contact if needed, then append the phone.
pub fn add(args: &[&str], ctx: &mut CommandContext<'_>) -> CommandResult<String> {
    let [name, phone] = require(args, "name and phone")?;
    // Validate before touching the book so a bad phone creates no record.
    let phone = Phone::new(phone)?;
    let reply = format!("Added {} with phone number {}", name, phone);
    ctx.book.find_or_create(name).push_phone(phone);
    Ok(reply)
}

/// `change <name> <phone>`: replace the contact's first phone.
pub fn change(args: &[&str], ctx: &mut CommandContext<'_>) -> CommandResult<String> {
    let [name, new_phone] = require(args, "name and new phone")?;
    let record = find_mut(ctx, name)?;
    let old_phone = record
        .first_phone()
        .map(|p| p.to_string())
        .ok_or_else(|| CommandError::NoPhones(name.to_string()))?;
    record.edit_phone(&old_phone, new_phone)?;
    Ok(format!("Changed {}'s phone number to {}", name, new_phone))
}

/// `phone <name>`: the contact's first phone.
pub fn phone(args: &[&str], ctx: &mut CommandContext<'_>) -> CommandResult<String> {
    let [name] = require(args, "name")?;
    find(ctx, name)?
        .first_phone()
        .map(|p| p.to_string())
        .ok_or_else(|| CommandError::NoPhones(name.to_string()))
}

/// `all`: one line per contact.
pub fn all(_args: &[&str], ctx: &mut CommandContext<'_>) -> CommandResult<String> {
    if ctx.book.is_empty() {
        return Ok("No contacts saved".to_string());
    }
    let lines: Vec<String> = ctx.book.all().map(Record::describe).collect();
    Ok(lines.join("\n"))
}

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[&str], ctx: &mut CommandContext<'_>) -> CommandResult<String> {
    let [name, birthday] = require(args, "name and birthday")?;
    find_mut(ctx, name)?.add_birthday(birthday)?;
    Ok(format!("Added birthday {} for {}", birthday, name))
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[&str], ctx: &mut CommandContext<'_>) -> CommandResult<String> {
    let [name] = require(args, "name")?;
    Ok(find(ctx, name)?.birthday_display())
}

/// `birthdays`: the weekly report for the context's `today`.
pub fn birthdays(_args: &[&str], ctx: &mut CommandContext<'_>) -> CommandResult<String> {
    let report = ctx.book.weekly_birthdays(ctx.today);
    if report.is_empty() {
        return Ok("No birthdays in the coming week.".to_string());
    }
    Ok(report.to_string())
}

/// `save`: write the book to the store.
pub fn save(_args: &[&str], ctx: &mut CommandContext<'_>) -> CommandResult<String> {
    ctx.store.save(&*ctx.book)?;
    Ok("Address book saved.".to_string())
}

/// `load`: merge the stored book into memory; stored records win.
pub fn load(_args: &[&str], ctx: &mut CommandContext<'_>) -> CommandResult<String> {
    match ctx.store.load()? {
        Some(stored) => {
            info!(contacts = stored.len(), "Merging stored address book");
            ctx.book.merge(stored);
        }
        None => info!("Nothing stored yet"),
    }
    Ok("Address book loaded from disk.".to_string())
}

/// `close` / `exit`: say goodbye and end the session; the caller saves.
pub fn exit(_args: &[&str], _ctx: &mut CommandContext<'_>) -> CommandResult<String> {
    Ok("Goodbye!".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_exact() {
        let [a, b] = require::<2>(&["x", "y"], "two").unwrap();
        assert_eq!((a, b), ("x", "y"));
    }

    #[test]
    fn test_require_ignores_extra() {
        let [a] = require::<1>(&["x", "y", "z"], "one").unwrap();
        assert_eq!(a, "x");
    }

    #[test]
    fn test_require_too_few() {
        let err = require::<2>(&["x"], "name and phone").unwrap_err();
        assert!(matches!(err, CommandError::Arity { needs: "name and phone" }));
    }
}
