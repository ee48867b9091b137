use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context};
use catalog_core::{AppState, Msg, ProductId, SelectedFile};
use catalog_engine::{ApiSettings, EngineHandle};
use catalog_logging::catalog_info;

use crate::cli::{Command, CreateArgs, EditArgs};
use crate::effects::EffectRunner;
use crate::render::{render_categories, render_form};
use crate::session::Session;

/// Runs one subcommand and reports whether it succeeded.
pub fn run_command(
    command: Command,
    settings: ApiSettings,
    out: &mut dyn Write,
) -> anyhow::Result<bool> {
    let wait = settings.connect_timeout + settings.request_timeout + Duration::from_secs(1);
    let engine = EngineHandle::new(settings.clone()).context("failed to start engine")?;
    let mut session = Session::new(EffectRunner::new(engine), wait);

    match command {
        Command::Categories => list_categories(&mut session, out),
        Command::Create(args) => create(&mut session, &settings, args, out),
        Command::Edit(args) => edit(&mut session, &settings, args, out),
    }
}

fn list_categories(session: &mut Session, out: &mut dyn Write) -> anyhow::Result<bool> {
    session.open(AppState::new());
    session.settle()?;
    let view = session.view();
    if let Some(error) = &view.error {
        writeln!(out, "error: {error}")?;
        return Ok(false);
    }
    // Skip the placeholder entry.
    for line in render_categories(&view).into_iter().skip(1) {
        writeln!(out, "{line}")?;
    }
    Ok(true)
}

fn create(
    session: &mut Session,
    settings: &ApiSettings,
    args: CreateArgs,
    out: &mut dyn Write,
) -> anyhow::Result<bool> {
    let files = select_files(&args.images)?;
    session.open(AppState::new());
    session.settle()?;
    if let Some(error) = session.view().error {
        writeln!(out, "error: {error}")?;
        return Ok(false);
    }

    session.dispatch(Msg::TitleChanged(args.title));
    session.dispatch(Msg::DescriptionChanged(args.description));
    session.dispatch(Msg::PriceChanged(args.price));
    session.dispatch(Msg::CategorySelected(args.category));
    session.dispatch(Msg::FilesSelected(files));
    let ok = submit(session, settings, out)?;

    if let Some(product_id) = session.navigation() {
        writeln!(out)?;
        open_edit_view(session, settings, product_id, out)?;
    }
    Ok(ok)
}

fn edit(
    session: &mut Session,
    settings: &ApiSettings,
    args: EditArgs,
    out: &mut dyn Write,
) -> anyhow::Result<bool> {
    let files = select_files(&args.images)?;
    if !open_edit_view(session, settings, args.id, out)? {
        return Ok(false);
    }

    if let Some(title) = args.title {
        session.dispatch(Msg::TitleChanged(title));
    }
    if let Some(description) = args.description {
        session.dispatch(Msg::DescriptionChanged(description));
    }
    if let Some(price) = args.price {
        session.dispatch(Msg::PriceChanged(price));
    }
    if let Some(category) = args.category {
        session.dispatch(Msg::CategorySelected(Some(category)));
    }
    for image_id in args.remove_images {
        session.dispatch(Msg::ExistingImageRemoved(image_id));
    }
    if !files.is_empty() {
        session.dispatch(Msg::FilesSelected(files));
    }
    writeln!(out)?;
    submit(session, settings, out)
}

fn open_edit_view(
    session: &mut Session,
    settings: &ApiSettings,
    product_id: ProductId,
    out: &mut dyn Write,
) -> anyhow::Result<bool> {
    catalog_info!("Opening edit view for product {}", product_id);
    session.open(AppState::edit(product_id));
    session.settle()?;
    let view = session.view();
    for line in render_form(&view, settings) {
        writeln!(out, "{line}")?;
    }
    Ok(view.error.is_none())
}

fn submit(
    session: &mut Session,
    settings: &ApiSettings,
    out: &mut dyn Write,
) -> anyhow::Result<bool> {
    session.dispatch(Msg::SubmitClicked);
    let alerts = session.take_alerts();
    for alert in &alerts {
        writeln!(out, "alert: {alert}")?;
    }
    if !alerts.is_empty() {
        return Ok(false);
    }
    session.settle()?;
    let view = session.view();
    for line in render_form(&view, settings) {
        writeln!(out, "{line}")?;
    }
    Ok(view.error.is_none())
}

fn select_files(paths: &[PathBuf]) -> anyhow::Result<Vec<SelectedFile>> {
    paths
        .iter()
        .map(|path| {
            let metadata =
                fs::metadata(path).with_context(|| format!("cannot read image {path:?}"))?;
            if !metadata.is_file() {
                bail!("{path:?} is not a file");
            }
            let name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            Ok(SelectedFile {
                name,
                path: path.clone(),
                byte_len: metadata.len(),
            })
        })
        .collect()
}
