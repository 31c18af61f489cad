//! Category filtering and enter/exit animation for the equipment and
//! portfolio card grids, plus the shared detail popup state.

/// Sentinel filter key that matches every card.
pub const FILTER_ALL: &str = "all";

/// Card fade/slide-in duration (ease-out).
pub const ENTER_MS: f32 = 300.0;

/// Card fade/slide-out duration (ease-in). The card stays in layout until
/// this completes so grids never pop.
pub const EXIT_MS: f32 = 200.0;

/// Vertical slide distance in logical units.
pub const SLIDE_UNITS: f32 = 20.0;

fn ease_out_quad(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

fn ease_in_quad(t: f32) -> f32 {
    t * t
}

/// Animation phase of one card. Elapsed time is carried in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CardPhase {
    Entering(f32),
    Visible,
    Exiting(f32),
    Hidden,
}

#[derive(Debug, Clone)]
pub struct Card {
    pub id: String,
    pub category: String,
    phase: CardPhase,
}

impl Card {
    fn new(id: &str, category: &str) -> Self {
        Self {
            id: id.to_string(),
            category: category.to_string(),
            phase: CardPhase::Visible,
        }
    }

    pub fn phase(&self) -> CardPhase {
        self.phase
    }

    /// Still occupying grid space (anything but fully hidden).
    pub fn in_layout(&self) -> bool {
        self.phase != CardPhase::Hidden
    }

    /// Selectable by the cursor. Exiting cards are on their way out.
    pub fn interactive(&self) -> bool {
        matches!(self.phase, CardPhase::Entering(_) | CardPhase::Visible)
    }

    /// 0.0 - 1.0 render opacity for the current phase.
    pub fn opacity(&self) -> f32 {
        match self.phase {
            CardPhase::Entering(ms) => ease_out_quad((ms / ENTER_MS).min(1.0)),
            CardPhase::Visible => 1.0,
            CardPhase::Exiting(ms) => 1.0 - ease_in_quad((ms / EXIT_MS).min(1.0)),
            CardPhase::Hidden => 0.0,
        }
    }

    /// Vertical offset in logical units: 20 -> 0 entering, 0 -> -20 exiting.
    pub fn offset_y(&self) -> f32 {
        match self.phase {
            CardPhase::Entering(ms) => SLIDE_UNITS * (1.0 - ease_out_quad((ms / ENTER_MS).min(1.0))),
            CardPhase::Visible => 0.0,
            CardPhase::Exiting(ms) => -SLIDE_UNITS * ease_in_quad((ms / EXIT_MS).min(1.0)),
            CardPhase::Hidden => -SLIDE_UNITS,
        }
    }
}

/// One filterable card grid. Exactly one filter button is active at a time;
/// applying a filter starts the enter/exit animations and `tick` drives them
/// to completion.
pub struct CardGrid {
    cards: Vec<Card>,
    filters: Vec<String>,
    active_filter: usize,
    cursor: usize,
}

impl CardGrid {
    /// `filters` should start with the "all" sentinel; `cards` are
    /// (id, category) pairs. Everything starts visible.
    pub fn new(filters: &[&str], cards: &[(&str, &str)]) -> Self {
        Self {
            cards: cards.iter().map(|(id, cat)| Card::new(id, cat)).collect(),
            filters: filters.iter().map(|f| f.to_string()).collect(),
            active_filter: 0,
            cursor: 0,
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn filters(&self) -> &[String] {
        &self.filters
    }

    pub fn active_filter(&self) -> &str {
        &self.filters[self.active_filter]
    }

    pub fn active_filter_index(&self) -> usize {
        self.active_filter
    }

    fn matches(filter: &str, card: &Card) -> bool {
        filter == FILTER_ALL || card.category == filter
    }

    /// Activate the filter at `index` and start transitions. Cards never
    /// hide immediately; exits finish before a card leaves the layout.
    pub fn apply_filter_index(&mut self, index: usize) {
        if index >= self.filters.len() {
            return;
        }
        self.active_filter = index;
        let key = self.filters[index].clone();

        for card in &mut self.cards {
            let matching = Self::matches(&key, card);
            card.phase = match (matching, card.phase) {
                (true, CardPhase::Hidden) => CardPhase::Entering(0.0),
                (true, CardPhase::Exiting(_)) => CardPhase::Entering(0.0),
                (true, keep) => keep,
                (false, CardPhase::Visible) => CardPhase::Exiting(0.0),
                (false, CardPhase::Entering(_)) => CardPhase::Exiting(0.0),
                (false, keep) => keep,
            };
        }
        self.clamp_cursor();
    }

    pub fn apply_filter(&mut self, key: &str) {
        if let Some(idx) = self.filters.iter().position(|f| f == key) {
            self.apply_filter_index(idx);
        }
    }

    pub fn next_filter(&mut self) {
        let next = (self.active_filter + 1) % self.filters.len();
        self.apply_filter_index(next);
    }

    pub fn prev_filter(&mut self) {
        let prev = if self.active_filter == 0 {
            self.filters.len() - 1
        } else {
            self.active_filter - 1
        };
        self.apply_filter_index(prev);
    }

    /// Advance all running card animations by `dt_ms`.
    pub fn tick(&mut self, dt_ms: f32) {
        for card in &mut self.cards {
            card.phase = match card.phase {
                CardPhase::Entering(ms) => {
                    let ms = ms + dt_ms;
                    if ms >= ENTER_MS {
                        CardPhase::Visible
                    } else {
                        CardPhase::Entering(ms)
                    }
                }
                CardPhase::Exiting(ms) => {
                    let ms = ms + dt_ms;
                    if ms >= EXIT_MS {
                        CardPhase::Hidden
                    } else {
                        CardPhase::Exiting(ms)
                    }
                }
                settled => settled,
            };
        }
        self.clamp_cursor();
    }

    /// True while any card is still animating.
    pub fn animating(&self) -> bool {
        self.cards
            .iter()
            .any(|c| matches!(c.phase, CardPhase::Entering(_) | CardPhase::Exiting(_)))
    }

    /// Ids of cards currently occupying layout space.
    pub fn layout_ids(&self) -> Vec<&str> {
        self.cards
            .iter()
            .filter(|c| c.in_layout())
            .map(|c| c.id.as_str())
            .collect()
    }

    // --- cursor over interactive cards ---

    fn interactive_indices(&self) -> Vec<usize> {
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, c)| c.interactive())
            .map(|(i, _)| i)
            .collect()
    }

    fn clamp_cursor(&mut self) {
        let idx = self.interactive_indices();
        if idx.is_empty() {
            self.cursor = 0;
        } else if !idx.contains(&self.cursor) {
            self.cursor = idx[0];
        }
    }

    pub fn selected_card(&self) -> Option<&Card> {
        self.cards.get(self.cursor).filter(|c| c.interactive())
    }

    pub fn selected_index(&self) -> usize {
        self.cursor
    }

    pub fn select_next(&mut self) {
        let idx = self.interactive_indices();
        if let Some(pos) = idx.iter().position(|&i| i == self.cursor) {
            self.cursor = idx[(pos + 1) % idx.len()];
        } else if let Some(&first) = idx.first() {
            self.cursor = first;
        }
    }

    pub fn select_prev(&mut self) {
        let idx = self.interactive_indices();
        if let Some(pos) = idx.iter().position(|&i| i == self.cursor) {
            self.cursor = idx[(pos + idx.len() - 1) % idx.len()];
        } else if let Some(&first) = idx.first() {
            self.cursor = first;
        }
    }
}

/// What the shared detail popup is currently showing. One popup kind at a
/// time by construction; reopening just replaces the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView {
    Equipment(String),
    Project(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gear_grid() -> CardGrid {
        CardGrid::new(
            &["all", "microphones", "consoles"],
            &[
                ("neumann-u87", "microphones"),
                ("akg-c414", "microphones"),
                ("ssl-4000e", "consoles"),
            ],
        )
    }

    /// Drive animations to rest.
    fn settle(grid: &mut CardGrid) {
        for _ in 0..40 {
            grid.tick(16.0);
        }
        assert!(!grid.animating());
    }

    #[test]
    fn filter_settles_to_exact_category_subset() {
        let mut grid = gear_grid();
        grid.apply_filter("consoles");
        settle(&mut grid);
        assert_eq!(grid.layout_ids(), vec!["ssl-4000e"]);

        grid.apply_filter("microphones");
        settle(&mut grid);
        assert_eq!(grid.layout_ids(), vec!["neumann-u87", "akg-c414"]);
    }

    #[test]
    fn all_sentinel_restores_everything() {
        let mut grid = gear_grid();
        grid.apply_filter("consoles");
        settle(&mut grid);
        grid.apply_filter(FILTER_ALL);
        settle(&mut grid);
        assert_eq!(grid.layout_ids().len(), 3);
    }

    #[test]
    fn exiting_cards_stay_in_layout_until_animation_completes() {
        let mut grid = gear_grid();
        grid.apply_filter("consoles");
        // Mid-exit: the microphones are fading but still occupy space
        grid.tick(100.0);
        assert_eq!(grid.layout_ids().len(), 3);
        // Past 200ms they are gone
        grid.tick(150.0);
        assert_eq!(grid.layout_ids(), vec!["ssl-4000e"]);
    }

    #[test]
    fn exactly_one_filter_active() {
        let mut grid = gear_grid();
        assert_eq!(grid.active_filter(), "all");
        grid.next_filter();
        assert_eq!(grid.active_filter(), "microphones");
        grid.prev_filter();
        assert_eq!(grid.active_filter(), "all");
        grid.prev_filter();
        assert_eq!(grid.active_filter(), "consoles");
    }

    #[test]
    fn unknown_filter_key_is_ignored() {
        let mut grid = gear_grid();
        grid.apply_filter("turntables");
        assert_eq!(grid.active_filter(), "all");
        assert_eq!(grid.layout_ids().len(), 3);
    }

    #[test]
    fn enter_animation_rises_and_brightens() {
        let mut grid = gear_grid();
        grid.apply_filter("consoles");
        settle(&mut grid);
        grid.apply_filter(FILTER_ALL);

        let entering = &grid.cards()[0];
        assert_eq!(entering.opacity(), 0.0);
        assert_eq!(entering.offset_y(), SLIDE_UNITS);

        grid.tick(150.0);
        let halfway = &grid.cards()[0];
        assert!(halfway.opacity() > 0.0 && halfway.opacity() < 1.0);
        assert!(halfway.offset_y() > 0.0 && halfway.offset_y() < SLIDE_UNITS);

        grid.tick(200.0);
        assert_eq!(grid.cards()[0].opacity(), 1.0);
        assert_eq!(grid.cards()[0].offset_y(), 0.0);
    }

    #[test]
    fn cursor_skips_non_interactive_cards() {
        let mut grid = gear_grid();
        grid.apply_filter("consoles");
        settle(&mut grid);
        assert_eq!(grid.selected_card().unwrap().id, "ssl-4000e");
        grid.select_next();
        assert_eq!(grid.selected_card().unwrap().id, "ssl-4000e");
    }
}
