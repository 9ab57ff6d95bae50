use crate::tui::{inputs::{map_event, Action}, views::{self, GalleryView, RightPane}};
use crossterm::{
    event::{self},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use hearthgrid_core::{
    draw_random, CardSource, CatalogPage, CatalogSession, Card, ManaBucket,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stdout, Stdout};
use std::sync::Arc;
use tokio::runtime::Runtime;
use tracing::warn;

pub struct TuiApp {
    pub source: Arc<dyn CardSource>,
    pub rt: Arc<Runtime>,
    session: CatalogSession,
    classes: Vec<String>,
    set_keys: Vec<String>,
    page: CatalogPage,
    sel: usize,
    searching: bool,
    drawn: Option<Card>,
    draw_pool: Option<Vec<Card>>,
    status: Option<String>,
}

/// Steps through `options` with the empty "all" choice in front.
pub fn cycle(options: &[String], current: &str, forward: bool) -> String {
    let n = options.len() + 1;
    let idx = options.iter().position(|o| o == current).map(|i| i + 1).unwrap_or(0);
    let next = if forward { (idx + 1) % n } else { (idx + n - 1) % n };
    if next == 0 { String::new() } else { options[next - 1].clone() }
}

fn next_mana(current: ManaBucket) -> ManaBucket {
    let choices = ManaBucket::CHOICES;
    let idx = choices.iter().position(|b| *b == current).unwrap_or(0);
    choices[(idx + 1) % choices.len()]
}

impl TuiApp {
    pub fn new(source: Arc<dyn CardSource>, rt: Arc<Runtime>, session: CatalogSession) -> Self {
        let classes = session.classes();
        let set_keys = session.sets().newest_first().into_iter().map(str::to_string).collect();
        let page = session.view(chrono::Utc::now());
        Self {
            source,
            rt,
            session,
            classes,
            set_keys,
            page,
            sel: 0,
            searching: false,
            drawn: None,
            draw_pool: None,
            status: None,
        }
    }

    fn refresh(&mut self) {
        self.page = self.session.view(chrono::Utc::now());
        self.sel = self.sel.min(self.page.cards.len().saturating_sub(1));
    }

    /// Re-derive after a criteria change; selection goes back to the top.
    fn refilter(&mut self) {
        self.sel = 0;
        self.refresh();
    }

    fn load_more(&mut self) {
        if self.page.has_more {
            self.session.load_more();
            self.refresh();
        }
    }

    fn draw_card(&mut self) {
        if self.draw_pool.is_none() {
            match self.rt.block_on(self.source.fetch_draw_pool()) {
                Ok(cards) => self.draw_pool = Some(cards),
                Err(e) => {
                    warn!(error = %e, "draw pool fetch failed");
                    self.status = Some(e.to_string());
                    return;
                }
            }
        }
        let pool = self.draw_pool.as_deref().unwrap_or_default();
        self.drawn = draw_random(pool, &mut rand::thread_rng()).cloned();
        if self.drawn.is_none() {
            self.status = Some("no collectible cards to draw from".to_string());
        }
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let res = self.mainloop(&mut terminal);

        disable_raw_mode().ok();
        let mut out: Stdout = std::io::stdout();
        execute!(out, LeaveAlternateScreen).ok();
        terminal.show_cursor().ok();

        res
    }

    fn mainloop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> anyhow::Result<()> {
        loop {
            terminal.draw(|f| {
                let right = match (&self.drawn, self.page.cards.get(self.sel)) {
                    (Some(card), _) => RightPane::Drawn(card),
                    (None, Some(card)) => RightPane::Selected(card),
                    (None, None) => RightPane::Empty("No cards match the current filters."),
                };
                let set_key = &self.session.criteria().set_key;
                let set_label = if set_key.is_empty() {
                    "All".to_string()
                } else {
                    self.session.sets().format_name(set_key)
                };
                let view = GalleryView {
                    criteria: self.session.criteria(),
                    set_label,
                    page: &self.page,
                    sel: self.sel,
                    searching: self.searching,
                    status: self.status.as_deref(),
                    right,
                };
                views::draw_ui(f, f.size(), &view);
            })?;

            if event::poll(std::time::Duration::from_millis(100))? {
                let ev = event::read()?;
                let action = map_event(ev, self.searching);
                if action != Action::None {
                    self.status = None;
                }
                if !self.apply(action) {
                    break;
                }
            }
        }
        Ok(())
    }

    /// Returns false when the app should exit.
    fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return false,
            Action::Up => self.sel = self.sel.saturating_sub(1),
            Action::Down => {
                if self.sel + 1 < self.page.cards.len() {
                    self.sel += 1;
                } else {
                    self.load_more();
                    if self.sel + 1 < self.page.cards.len() {
                        self.sel += 1;
                    }
                }
            }
            Action::LoadMore => self.load_more(),
            Action::StartSearch => self.searching = true,
            Action::EndSearch => self.searching = false,
            Action::SearchChar(c) => {
                let mut term = self.session.criteria().search.clone();
                term.push(c);
                self.session.set_search(term);
                self.refilter();
            }
            Action::SearchBackspace => {
                let mut term = self.session.criteria().search.clone();
                term.pop();
                self.session.set_search(term);
                self.refilter();
            }
            Action::NextClass | Action::PrevClass => {
                let next = cycle(&self.classes, &self.session.criteria().class, action == Action::NextClass);
                self.session.set_class(next);
                self.refilter();
            }
            Action::NextSet | Action::PrevSet => {
                let next = cycle(&self.set_keys, &self.session.criteria().set_key, action == Action::NextSet);
                self.session.set_set_key(next);
                self.refilter();
            }
            Action::NextMana => {
                self.session.set_mana(next_mana(self.session.criteria().mana));
                self.refilter();
            }
            Action::ToggleRotation => {
                let on = !self.session.criteria().rotation_only;
                self.session.set_rotation_only(on);
                self.refilter();
            }
            Action::Sort(field) => {
                self.session.toggle_sort(field);
                self.refilter();
            }
            Action::Draw => self.draw_card(),
            Action::Dismiss => self.drawn = None,
            Action::Reset => {
                self.session.reset();
                self.drawn = None;
                self.refilter();
            }
            Action::None => {}
        }
        true
    }
}
