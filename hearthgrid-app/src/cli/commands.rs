use crate::api::server as api_server;
use crate::cli::opts::*;
use crate::display::{detail_lines, plain_text};

use anyhow::{bail, Context, Result};
use chrono::Utc;
use hearthgrid_core::{
    classes, compute_page, draw_random, images, repo::memory::MemorySource, CardSource,
    CatalogPage, CriteriaInput, FilterCriteria, SetTable,
};
use hearthgrid_http::HttpCardSource;
use std::io::stdout;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub async fn run_cli(args: Cli) -> Result<()> {
    let sets = SetTable::standard();
    match args.cmd.clone() {
        Command::Tui => bail!("the TUI runs on its own runtime; start it from main"),
        Command::Sets { rotation } => {
            sets_cmd(&sets, rotation);
            Ok(())
        }
        Command::Api(api) => {
            let source = open_source(&args)?;
            let cards = source.fetch_cards().await?;
            let addr: std::net::SocketAddr = api.addr.parse()?;
            info!(%addr, cards = cards.len(), "starting api");
            api_server::run(cards, sets, addr).await
        }
        Command::Browse(cmd) => browse_cmd(open_source(&args)?, &sets, cmd).await,
        Command::Draw(cmd) => draw_cmd(open_source(&args)?, cmd).await,
        Command::Classes => classes_cmd(open_source(&args)?).await,
    }
}

pub fn open_source(args: &Cli) -> Result<Arc<dyn CardSource>> {
    if let Some(path) = &args.cards_file {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        return Ok(Arc::new(MemorySource::from_json(&data)?));
    }
    let s = HttpCardSource::new(args.api_url.clone(), Duration::from_secs(args.timeout_secs))?;
    Ok(Arc::new(s))
}

impl From<FilterArgs> for CriteriaInput {
    fn from(f: FilterArgs) -> Self {
        CriteriaInput {
            search: f.search,
            class: f.class,
            set: f.set,
            mana: f.mana,
            rotation: Some(f.rotation),
            sort: Some(f.sort),
            order: Some(f.order),
            page: Some(f.page),
        }
    }
}

pub fn parse_filters(args: FilterArgs, sets: &SetTable) -> Result<FilterCriteria> {
    Ok(CriteriaInput::from(args).into_criteria(sets)?)
}

async fn browse_cmd(source: Arc<dyn CardSource>, sets: &SetTable, cmd: BrowseCmd) -> Result<()> {
    let criteria = parse_filters(cmd.filters, sets)?;
    let cards = source.fetch_cards().await?;
    let page = compute_page(&cards, &criteria, sets, Utc::now());

    match cmd.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&page)?),
        OutputFormat::Csv => write_csv(&page)?,
        OutputFormat::Table => print_table(&page, cmd.images),
    }
    Ok(())
}

fn print_table(page: &CatalogPage, with_images: bool) {
    for c in &page.cards {
        let stats = match (c.attack, c.health) {
            (Some(a), Some(h)) => format!("{a}/{h}"),
            _ => "-".to_string(),
        };
        let mut line = format!(
            "{}\t{}\t{}\t{}\t{}\t{}",
            c.id,
            c.name,
            c.cost_or_zero(),
            stats,
            c.class_label(),
            c.set.as_deref().unwrap_or("-"),
        );
        if with_images {
            line.push('\t');
            line.push_str(&images::render_url(&c.id));
        }
        println!("{line}");
    }
    if page.has_more {
        println!("showing {} of {} (use --page {} for more)", page.displayed, page.total, page.page + 1);
    } else {
        println!("showing {} of {}", page.displayed, page.total);
    }
}

fn write_csv(page: &CatalogPage) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(stdout());
    wtr.write_record(["id", "name", "cost", "attack", "health", "class", "type", "rarity", "set", "text"])?;
    let opt = |v: Option<u32>| v.map(|n| n.to_string()).unwrap_or_default();
    for c in &page.cards {
        wtr.write_record([
            c.id.clone(),
            c.name.clone(),
            opt(c.cost),
            opt(c.attack),
            opt(c.health),
            c.card_class.clone().unwrap_or_default(),
            c.card_type.clone().unwrap_or_default(),
            c.rarity.clone().unwrap_or_default(),
            c.set.clone().unwrap_or_default(),
            c.text.as_deref().map(plain_text).unwrap_or_default(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

async fn draw_cmd(source: Arc<dyn CardSource>, cmd: DrawCmd) -> Result<()> {
    let pool = source.fetch_draw_pool().await?;
    let Some(card) = draw_random(&pool, &mut rand::thread_rng()) else {
        bail!("no collectible cards to draw from");
    };
    if cmd.json {
        println!("{}", serde_json::to_string_pretty(card)?);
        return Ok(());
    }
    println!("{}", card.name);
    for (label, value) in detail_lines(card) {
        println!("{label}: {value}");
    }
    Ok(())
}

async fn classes_cmd(source: Arc<dyn CardSource>) -> Result<()> {
    let cards = source.fetch_cards().await?;
    for c in classes(&cards) {
        println!("{c}");
    }
    Ok(())
}

fn sets_cmd(sets: &SetTable, rotation_only: bool) {
    let today = Utc::now().date_naive();
    for key in sets.newest_first() {
        let in_rotation = sets.is_in_rotation(key, today);
        if rotation_only && !in_rotation {
            continue;
        }
        let date = sets.get(key).map(|s| s.date.as_str()).unwrap_or("");
        let date = if date.is_empty() { "-" } else { date };
        let marker = if in_rotation { "standard" } else { "wild" };
        println!("{}\t{}\t{}\t{}", key, sets.format_name(key), date, marker);
    }
}
