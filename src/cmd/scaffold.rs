//! Scaffolding commands: `grind new`, `grind add-track`, `grind check-names`.

use anyhow::{Context, Result, bail};

use grind::config::Config;
use grind::kind::SolutionKind;
use grind::scaffold::{NewSolution, add_track, check_filenames, create_solution};
use grind::taxonomy::slugify;
use grind::ui::icons::{CHECK, CROSS, FILE_NEW, FOLDER};

/// Arguments of `grind new` as parsed by clap.
pub struct NewArgs<'a> {
    pub kind: SolutionKind,
    pub track: &'a str,
    pub id: u32,
    pub slug: Option<&'a str>,
    pub title: &'a str,
    pub difficulty: &'a str,
    pub category: &'a str,
    pub tags: &'a str,
}

pub fn cmd_new(config: &Config, args: NewArgs<'_>) -> Result<()> {
    let slug = match args.slug {
        Some(slug) => slug.to_string(),
        None => slugify(args.title).replace('-', "_"),
    };

    let request = NewSolution {
        kind: args.kind,
        track: args.track.to_string(),
        id: args.id,
        slug,
        title: args.title.to_string(),
        difficulty: args.difficulty.to_string(),
        category: args.category.to_string(),
        tags: args.tags.to_string(),
    };

    let out = create_solution(config, &request)
        .with_context(|| format!("Failed to create solution {:04}", args.id))?;

    println!("{}Created: {}", FILE_NEW, config.display_relative(&out.path));
    if out.csv_row_added {
        println!("  Added {:04} to the {} plan", request.id, request.track);
    }
    Ok(())
}

pub fn cmd_add_track(config: &Config, key: &str, name: &str, kind: SolutionKind) -> Result<()> {
    let added = add_track(config, key, name, kind)
        .with_context(|| format!("Failed to add track '{}'", key))?;

    println!();
    println!("{}Registered track {} ({})", CHECK, added.track.key, added.track.name);
    println!("  {}{}", FOLDER, config.display_relative(&added.solution_dir));
    match &added.template {
        Some(path) => println!("  {}{}", FILE_NEW, config.display_relative(path)),
        None => println!(
            "  {}",
            console::style(format!("No base template found; add _template.{} by hand", kind.extension())).yellow()
        ),
    }
    println!("  {}{}", FILE_NEW, config.display_relative(&added.csv));
    println!();
    println!("Run 'grind sync' after filling in the plan.");
    Ok(())
}

pub fn cmd_check_names(config: &Config) -> Result<()> {
    let bad = check_filenames(config);

    if bad.is_empty() {
        println!("{}All filenames OK", CHECK);
        return Ok(());
    }

    println!("{}Bad filenames:", CROSS);
    for path in &bad {
        println!("  - {}", config.display_relative(path));
    }
    bail!("{} file(s) do not match NNNN_lower_snake naming", bad.len());
}
