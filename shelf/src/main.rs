use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use fotosheet::io::svg::page_to_svg;
use fotosheet::pack::pack;
use log::{info, warn};
use shelf::config::ShelfConfig;
use shelf::io::cli::Cli;
use shelf::io::output::ShelfOutput;
use shelf::render::{self, PhotoSources};
use shelf::{EPOCH, io, probe};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("no config file provided, use --config-file to provide a custom config");
            ShelfConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("config: {config:?}");

    let input_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no usable stem")?;

    if !args.output_folder.exists() {
        fs::create_dir_all(&args.output_folder).with_context(|| {
            format!("could not create output folder: {:?}", args.output_folder)
        })?;
    }

    // photo paths in the job file are relative to the job file itself
    let base_dir = args.input_file.parent().unwrap_or(Path::new(".")).to_path_buf();

    let mut ext_job = io::read_job(&args.input_file)?;
    probe::probe_dimensions(&mut ext_job, &base_dir);

    let job = fotosheet::io::import(&ext_job)?;
    info!(
        "job '{}': {} photos, {} copies, sheet {:.1}x{:.1}cm",
        ext_job.name,
        job.photos.len(),
        job.total_copies(),
        job.sheet.width,
        job.sheet.height,
    );

    let start = std::time::Instant::now();
    let pages = pack(&job);
    let solution = fotosheet::io::export(&job, &pages);
    let run_time_ms = start.elapsed().as_millis() as u64;
    info!(
        "packed {} copies onto {} page(s) in {:.3}ms, mean density {:.3}%",
        solution.total_copies,
        pages.len(),
        start.elapsed().as_secs_f64() * 1000.0,
        solution.density * 100.0,
    );

    {
        let output = ShelfOutput {
            job: ext_job.clone(),
            solution,
            run_time_ms,
            produced_at: jiff::Timestamp::now().to_string(),
            config,
        };
        let output_path = args.output_folder.join(format!("sol_{input_stem}.json"));
        io::write_json(&output, &output_path)?;
    }

    for (n, page) in pages.iter().enumerate() {
        let svg_path = args
            .output_folder
            .join(format!("sol_{input_stem}_page_{n}.svg"));
        let title = format!("page {}/{}", n + 1, pages.len());
        io::write_svg(
            &page_to_svg(page, &job, config.svg_draw_options, &title),
            &svg_path,
        )?;
    }

    if args.render_pages || args.render_singles {
        let sources = PhotoSources::load(&job, &ext_job, &base_dir);
        if args.render_pages {
            render::render_pages(
                &job,
                &pages,
                &sources,
                config.render_dpi,
                &args.output_folder,
                input_stem,
            )?;
        }
        if args.render_singles {
            render::render_singles(
                &job,
                &pages,
                &sources,
                config.render_dpi,
                &args.output_folder,
                input_stem,
            )?;
        }
    }

    info!("finished in {:.3}ms", EPOCH.elapsed().as_secs_f64() * 1000.0);

    Ok(())
}
