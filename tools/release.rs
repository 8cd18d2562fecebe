use std::fs;
use std::io::{self, Write};
use std::process::Command;
use toml_edit::{DocumentMut, Item};

fn prompt(question: &str) -> Result<String, io::Error> {
    print!("{}: ", question);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn confirm(question: &str) -> Result<bool, io::Error> {
    Ok(prompt(&format!("{} (y/n)", question))?.to_lowercase() == "y")
}

fn sh(command: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("> {}", command);
    let status = Command::new("sh").arg("-c").arg(command).status()?;
    if !status.success() {
        return Err(format!("command failed: {}", command).into());
    }
    Ok(())
}

fn git_output(args: &[&str]) -> Result<String, Box<dyn std::error::Error>> {
    let output = Command::new("git").args(args).output()?;
    if !output.status.success() {
        return Ok(String::new());
    }
    Ok(String::from_utf8(output.stdout)?.trim().to_string())
}

// One line per commit since the last tag, or since the beginning of history
// when no tag exists yet.
fn release_notes() -> Result<String, Box<dyn std::error::Error>> {
    let last_tag = git_output(&["describe", "--tags", "--abbrev=0"])?;
    if last_tag.is_empty() {
        return git_output(&["log", "--pretty=format:- %s"]);
    }

    let range = format!("{}..HEAD", last_tag);
    git_output(&["log", "--pretty=format:- %s", &range])
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cargo = fs::read_to_string("Cargo.toml")?;
    let mut doc = cargo.parse::<DocumentMut>()?;

    let current = doc["package"]["version"]
        .as_str()
        .ok_or("no package.version in Cargo.toml")?;
    println!("Current version: {}", current);

    let next = prompt("New version")?;
    if next.is_empty() {
        return Err("version cannot be empty".into());
    }
    if !confirm(&format!("Release v{}?", next))? {
        println!("Aborted.");
        return Ok(());
    }

    doc["package"]["version"] = Item::from(next.as_str());
    fs::write("Cargo.toml", doc.to_string())?;
    println!("Cargo.toml bumped to {}", next);

    // Refresh Cargo.lock before committing the bump
    sh("cargo check")?;

    let notes = release_notes()?;
    if notes.is_empty() {
        println!("No commits since the last tag.");
        if !confirm("Continue with empty release notes?")? {
            println!("Aborted.");
            return Ok(());
        }
    } else {
        println!("Release notes:\n{}", notes);
    }

    sh("git add Cargo.toml Cargo.lock")?;
    sh(&format!("git commit -m \"Bump version to {}\"", next))?;
    sh(&format!("git tag -a v{} -m \"Version {}\"", next, next))?;
    sh("git push && git push --tags")?;

    if confirm("Publish to crates.io?")? {
        sh("cargo publish")?;
    } else {
        println!("Skipped crates.io publish.");
    }

    if confirm("Create GitHub release?")? {
        let status = Command::new("gh")
            .args([
                "release",
                "create",
                &format!("v{}", next),
                "--title",
                &format!("v{}", next),
                "--notes",
                &notes,
            ])
            .status()?;
        if !status.success() {
            return Err("gh release create failed".into());
        }
    } else {
        println!("Skipped GitHub release.");
    }

    println!("Released v{}", next);
    Ok(())
}
