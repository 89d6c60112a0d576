//! Game context wiring the catalog, progression, flow and persistence
//!
//! Constructed explicitly at startup and handed to whatever needs it.
//! `ContextSlot` gives callers a typed "not ready yet" state instead of a
//! nullable global.

use crate::config::CoreConfig;
use crate::error::{GreatPeopleError, Result};
use crate::great_person::{tick_owned, GreatPersonCatalog, MultiplierSink};
use crate::i18n::Translator;
use crate::persistence::{load_game, migrate_saved_game, MigrationReport, SaveRequest, SaveStore, SavedGame, Saver};
use crate::reborn::{
    grant_reborn_choices, level_progress, ChoiceResolutionFlow, FlowState, LevelProgress,
    ObservableProgression, PendingChoiceSet, PickOutcome, RebornProgressionState,
};
use rand::Rng;
use std::sync::Arc;
use tokio::runtime::Handle;
use tracing::{info, warn};

/// Everything one loaded player session needs
pub struct GameContext {
    config: CoreConfig,
    catalog: Arc<GreatPersonCatalog>,
    translator: Arc<dyn Translator>,
    progression: ObservableProgression,
    flow: ChoiceResolutionFlow,
    saver: Saver,
}

impl GameContext {
    /// Saves are written on `runtime`'s blocking pool
    pub fn new(
        config: CoreConfig,
        catalog: Arc<GreatPersonCatalog>,
        store: Arc<dyn SaveStore>,
        translator: Arc<dyn Translator>,
        runtime: Handle,
    ) -> Self {
        let saver = Saver::new(store, config.save_key.clone(), runtime);
        Self {
            config,
            catalog,
            translator,
            progression: ObservableProgression::default(),
            flow: ChoiceResolutionFlow::new(),
            saver,
        }
    }

    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    pub fn catalog(&self) -> &GreatPersonCatalog {
        &self.catalog
    }

    pub fn translator(&self) -> &dyn Translator {
        self.translator.as_ref()
    }

    pub fn progression(&self) -> &ObservableProgression {
        &self.progression
    }

    pub fn flow(&self) -> &ChoiceResolutionFlow {
        &self.flow
    }

    pub fn flow_state(&self) -> FlowState {
        self.flow.state()
    }

    /// Choice set the player should be looking at, if any
    pub fn current_choices(&self) -> Option<&PendingChoiceSet> {
        self.flow.current(&self.progression)
    }

    pub fn level_progress(&self, id: &str) -> LevelProgress {
        level_progress(self.progression.state(), id)
    }

    /// Grant the choice sets of a reborn and start presenting them
    pub fn on_reborn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<usize> {
        let granted = grant_reborn_choices(&mut self.progression, &self.catalog, &self.config, rng)?;
        self.flow.sync(&self.progression);
        Ok(granted)
    }

    pub fn pick(&mut self, chosen: &str) -> Result<PickOutcome> {
        self.flow.pick(&mut self.progression, chosen)
    }

    /// Contribute every owned great person to the next tick
    pub fn tick_great_people(&self, permanent: bool, sink: &mut dyn MultiplierSink) -> Result<()> {
        tick_owned(
            &self.catalog,
            self.progression.state(),
            permanent,
            sink,
            self.translator.as_ref(),
        )
    }

    pub fn saved_game(&self) -> SavedGame {
        SavedGame {
            progression: self.progression.state().clone(),
        }
    }

    pub fn save(&self) -> SaveRequest {
        self.saver.save(&self.saved_game())
    }

    pub fn is_saving(&self) -> bool {
        self.saver.is_saving()
    }

    /// Migrate `game` against the catalog and make it the live state
    pub fn install(&mut self, mut game: SavedGame) -> MigrationReport {
        let report = migrate_saved_game(&mut game, &self.catalog);
        self.progression.replace(game.progression);
        self.flow.sync(&self.progression);
        report
    }

    /// Load from the configured store. Returns false and keeps the current
    /// state if nothing usable was found.
    pub fn restore(&mut self) -> bool {
        match load_game(self.saver.store().as_ref(), self.saver.key()) {
            Some(game) => {
                self.install(game);
                info!(key = %self.saver.key(), "saved game restored");
                true
            }
            None => false,
        }
    }

    /// Drop the saved game and reset in-memory state
    pub fn clear(&mut self) -> Result<()> {
        self.saver.store().clear(self.saver.key())?;
        self.progression.replace(RebornProgressionState::new());
        self.flow.sync(&self.progression);
        Ok(())
    }
}

impl std::fmt::Debug for GameContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameContext")
            .field("config", &self.config)
            .field("great_people", &self.catalog.len())
            .field("progression", &self.progression)
            .field("flow", &self.flow)
            .field("saver", &self.saver)
            .finish()
    }
}

/// Holder for the session context with an explicit uninitialized state
#[derive(Debug, Default)]
pub enum ContextSlot {
    #[default]
    Uninitialized,
    Ready(Box<GameContext>),
}

impl ContextSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the context. Installing twice replaces the old one.
    pub fn initialize(&mut self, context: GameContext) {
        if self.is_ready() {
            warn!("game context is already initialized, you are trying to initialize it again");
        }
        *self = ContextSlot::Ready(Box::new(context));
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ContextSlot::Ready(_))
    }

    pub fn get(&self) -> Result<&GameContext> {
        match self {
            ContextSlot::Ready(context) => Ok(&**context),
            ContextSlot::Uninitialized => Err(GreatPeopleError::NotInitialized),
        }
    }

    pub fn get_mut(&mut self) -> Result<&mut GameContext> {
        match self {
            ContextSlot::Ready(context) => Ok(&mut **context),
            ContextSlot::Uninitialized => Err(GreatPeopleError::NotInitialized),
        }
    }

    pub fn take(&mut self) -> Option<GameContext> {
        match std::mem::take(self) {
            ContextSlot::Ready(context) => Some(*context),
            ContextSlot::Uninitialized => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GlobalMultiplier;
    use crate::great_person::TickMultipliers;
    use crate::i18n::KeyTranslator;
    use crate::persistence::MemoryStore;
    use crate::reborn::GreatPersonInventory;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use once_cell::sync::Lazy;
    use std::time::{Duration, Instant};
    use tokio::runtime::Runtime;

    static RUNTIME: Lazy<Runtime> = Lazy::new(|| Runtime::new().unwrap());

    fn context_with(store: Arc<MemoryStore>) -> GameContext {
        GameContext::new(
            CoreConfig::default(),
            GreatPersonCatalog::builtin(),
            store,
            Arc::new(KeyTranslator),
            RUNTIME.handle().clone(),
        )
    }

    fn wait_saved(context: &GameContext) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while context.is_saving() {
            assert!(Instant::now() < deadline);
            std::thread::sleep(Duration::from_millis(1));
        }
    }

    #[test]
    fn test_slot_uninitialized() {
        let mut slot = ContextSlot::new();
        assert!(!slot.is_ready());
        assert_eq!(slot.get().unwrap_err(), GreatPeopleError::NotInitialized);
        assert!(slot.get_mut().is_err());
        assert!(slot.take().is_none());
    }

    #[test]
    fn test_slot_reinitialize_replaces() {
        let mut slot = ContextSlot::new();
        slot.initialize(context_with(Arc::new(MemoryStore::new())));
        assert!(slot.is_ready());

        let mut other = context_with(Arc::new(MemoryStore::new()));
        other.on_reborn(&mut StdRng::seed_from_u64(1)).unwrap();
        slot.initialize(other);
        assert_eq!(slot.get().unwrap().progression().state().choices_left(), 1);
    }

    #[test]
    fn test_reborn_pick_save_restore() {
        let store = Arc::new(MemoryStore::new());
        let mut context = context_with(store.clone());
        let mut rng = StdRng::seed_from_u64(42);

        assert_eq!(context.on_reborn(&mut rng).unwrap(), 1);
        assert_eq!(context.flow_state(), FlowState::Presenting);

        let chosen = context.current_choices().unwrap().ids()[0].clone();
        assert_eq!(context.pick(chosen.as_str()).unwrap(), PickOutcome::Drained);
        assert_eq!(context.flow_state(), FlowState::Idle);
        assert_eq!(context.level_progress(chosen.as_str()).level, Some(1));

        assert_eq!(context.save(), SaveRequest::Started);
        wait_saved(&context);

        let mut restored = context_with(store);
        assert!(restored.restore());
        assert_eq!(restored.progression().state(), context.progression().state());
    }

    #[test]
    fn test_restore_nothing_keeps_state() {
        let mut context = context_with(Arc::new(MemoryStore::new()));
        context.on_reborn(&mut StdRng::seed_from_u64(5)).unwrap();

        assert!(!context.restore());
        assert_eq!(context.progression().state().choices_left(), 1);
    }

    #[test]
    fn test_install_migrates_and_presents() {
        let mut context = context_with(Arc::new(MemoryStore::new()));
        let mut game = SavedGame::default();
        game.progression
            .insert_inventory("Plato", GreatPersonInventory::FIRST_PICK);
        game.progression
            .enqueue_choice(PendingChoiceSet::from(["Dido", "Rurik", "ZhengHe"]));

        let report = context.install(game);
        assert_eq!(report.removed_great_people, 1);
        assert_eq!(context.flow_state(), FlowState::Presenting);
    }

    #[test]
    fn test_tick_great_people() {
        let mut context = context_with(Arc::new(MemoryStore::new()));
        let mut game = SavedGame::default();
        game.progression
            .insert_inventory("FlorenceNightingale", GreatPersonInventory { level: 2, amount: 0 });
        context.install(game);

        let mut sink = TickMultipliers::new();
        context.tick_great_people(true, &mut sink).unwrap();
        assert_eq!(sink.global_total(GlobalMultiplier::Happiness), 6.0);
    }

    #[test]
    fn test_clear() {
        let store = Arc::new(MemoryStore::new());
        let mut context = context_with(store.clone());
        context.on_reborn(&mut StdRng::seed_from_u64(9)).unwrap();
        context.save();
        wait_saved(&context);

        context.clear().unwrap();
        assert_eq!(store.read("CivIdle").unwrap(), None);
        assert_eq!(context.flow_state(), FlowState::Idle);
    }
}
