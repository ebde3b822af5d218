//! One console player acting on an in-memory farm.
//!
//! [`Session`] plays the host: it owns the world and the player, forwards
//! clicks to the [`Reactor`], runs the host's default break when the
//! reactor does not suppress it, and renders admin output as text.

use std::fmt::Write as _;

use tracing::{debug, warn};

use cropcycle_actors::Actor;
use cropcycle_core::admin::{AdminLine, AdminSurface, Tone};
use cropcycle_core::reactor::{InteractionOutcome, Reactor};
use cropcycle_types::{
    CellPosition, HeldTool, InteractionEvent, InteractionShape, ItemStack, ResourceKind,
};
use cropcycle_world::{GridWorld, WorldError};

use crate::command::{ConsoleCommand, HELP};

/// What the console loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print these lines and keep reading.
    Lines(Vec<String>),
    /// Stop the console.
    Quit,
}

/// Lay out the demo farm: one row per cyclable crop plus a few cells the
/// reactor ignores.
///
/// # Errors
///
/// Returns [`WorldError`] if a row cannot be planted.
pub fn demo_world() -> Result<GridWorld, WorldError> {
    let mut world = GridWorld::new();
    let rows = [
        (ResourceKind::Wheat, 7),
        (ResourceKind::Carrots, 7),
        (ResourceKind::Potatoes, 5),
        (ResourceKind::Beetroots, 3),
        (ResourceKind::NetherWart, 3),
        (ResourceKind::SweetBerryBush, 3),
    ];
    for (z, (kind, stage)) in (0_i32..).zip(rows) {
        world.plant_field(kind, stage, CellPosition::new(0, 64, z), 4, 1)?;
    }
    world.plant_field(ResourceKind::Farmland, 0, CellPosition::new(0, 63, 0), 4, 6)?;
    Ok(world)
}

/// The console's host state.
#[derive(Debug)]
pub struct Session {
    reactor: Reactor,
    admin: AdminSurface,
    world: GridWorld,
    player: Actor,
}

impl Session {
    /// Create a session for `player` on `world`.
    pub const fn new(
        reactor: Reactor,
        admin: AdminSurface,
        world: GridWorld,
        player: Actor,
    ) -> Self {
        Self {
            reactor,
            admin,
            world,
            player,
        }
    }

    /// The world as it stands.
    pub const fn world(&self) -> &GridWorld {
        &self.world
    }

    /// The console player.
    pub const fn player(&self) -> &Actor {
        &self.player
    }

    /// Tell the reactor the host is going away.
    pub fn shutdown(&self) {
        self.reactor.on_disable();
    }

    /// Run one command.
    pub fn handle(&mut self, command: ConsoleCommand) -> Reply {
        let lines = match command {
            ConsoleCommand::Quit => return Reply::Quit,
            ConsoleCommand::Admin(args) => self.admin_command(&args),
            ConsoleCommand::Complete(args) => self.complete(&args),
            ConsoleCommand::Click(position) => self.click(position),
            ConsoleCommand::Punch(position) => self.punch(position),
            ConsoleCommand::Grow(steps) => {
                let changed = self.world.grow_all(steps);
                vec![format!("{changed} cells grew")]
            }
            ConsoleCommand::Hold { item, fortune } => {
                let tool = HeldTool { item, fortune };
                self.player.set_held_tool(tool);
                vec![describe_tool(tool)]
            }
            ConsoleCommand::Inventory => self.inventory(),
            ConsoleCommand::Field => self.field(),
            ConsoleCommand::Help => HELP.lines().map(str::to_owned).collect(),
        };
        Reply::Lines(lines)
    }

    fn admin_command(&self, args: &[String]) -> Vec<String> {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        let outcome = self.admin.execute(&self.player, &args);
        if outcome.handled {
            outcome.lines.iter().map(render_line).collect()
        } else {
            vec![format!("Usage: /{} [reload|info]", self.admin.command_name())]
        }
    }

    fn complete(&self, args: &[String]) -> Vec<String> {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        match self.admin.complete(&self.player, &args) {
            Some(offers) if offers.is_empty() => vec![String::from("(no completions)")],
            Some(offers) => vec![offers.join("  ")],
            None => vec![String::from("(default completion)")],
        }
    }

    fn click(&mut self, position: CellPosition) -> Vec<String> {
        let event = InteractionEvent::primary_on(self.player.id(), position);
        let outcome = self
            .reactor
            .handle_interaction(&event, &mut self.player, &mut self.world);

        match outcome {
            InteractionOutcome::Ignored => vec![format!("Nothing to harvest at {position}")],
            InteractionOutcome::Cycled(report) => {
                let mut line = format!("Harvested {} at {}", report.kind, report.position);
                if !report.delivered.is_empty() {
                    let _ = write!(line, "; received {}", list(&report.delivered));
                }
                if !report.spilled.is_empty() {
                    let _ = write!(line, "; dropped {}", list(&report.spilled));
                }
                if report.experience_granted > 0 {
                    let _ = write!(line, "; +{} xp", report.experience_granted);
                }
                vec![line]
            }
            InteractionOutcome::Faulted(fault) => {
                let mut lines = vec![format!("Cycle failed: {fault}")];
                lines.extend(self.player.notices().last().cloned());
                lines
            }
        }
    }

    fn punch(&mut self, position: CellPosition) -> Vec<String> {
        let event = InteractionEvent {
            actor: self.player.id(),
            shape: InteractionShape::SecondaryOnCell,
            target: Some(position),
        };
        let outcome = self
            .reactor
            .handle_interaction(&event, &mut self.player, &mut self.world);
        if outcome.suppress_default() {
            debug!(%position, "Default break suppressed");
            return vec![format!("Break at {position} was cancelled")];
        }

        match self.world.break_cell(position, &self.player.held_tool()) {
            Ok(drops) if drops.is_empty() => vec![format!("Broke {position}, nothing dropped")],
            Ok(drops) => vec![format!("Broke {position}, dropped {}", list(&drops))],
            Err(err) => {
                warn!(%position, error = %err, "Break failed");
                vec![format!("Nothing at {position}")]
            }
        }
    }

    fn inventory(&self) -> Vec<String> {
        let inventory = self.player.inventory();
        let stacks: Vec<ItemStack> = inventory.stacks().collect();
        let mut lines = vec![format!(
            "{}: {} items in {} slots, {} xp, holding {}",
            self.player.name(),
            inventory.total_items(),
            inventory.slot_count(),
            self.player.experience(),
            describe_tool(self.player.held_tool()),
        )];
        if !stacks.is_empty() {
            lines.push(format!("  {}", list(&stacks)));
        }
        let pickups = self.world.pickups();
        if !pickups.is_empty() {
            lines.push(format!("{} pickups on the ground", pickups.len()));
            lines.extend(
                pickups
                    .iter()
                    .map(|pickup| format!("  {} at {}", pickup.stack, pickup.position)),
            );
        }
        lines
    }

    fn field(&self) -> Vec<String> {
        self.world
            .cells()
            .map(|(position, cell)| {
                format!(
                    "{position} {} stage {}/{}",
                    cell.kind(),
                    cell.stage(),
                    cell.kind().growth().max_stage()
                )
            })
            .collect()
    }
}

fn list(stacks: &[ItemStack]) -> String {
    stacks
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn describe_tool(tool: HeldTool) -> String {
    match tool.item {
        Some(item) if tool.fortune > 0 => format!("{item} (fortune {})", tool.fortune),
        Some(item) => item.to_string(),
        None => String::from("nothing"),
    }
}

fn render_line(line: &AdminLine) -> String {
    let marker = match line.tone {
        Tone::Heading | Tone::Info => "",
        Tone::Warning => "! ",
        Tone::Hint => "> ",
        Tone::Detail => "  ",
    };
    format!("{marker}{}", line.text)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use cropcycle_actors::PermissionGate;
    use cropcycle_core::config::{EngineSettings, StaticSettingsSource};
    use cropcycle_core::context::ConfigurationContext;
    use cropcycle_types::ItemKind;
    use cropcycle_world::WorldCell;

    use super::*;

    fn session(player: Actor) -> Session {
        let context = Arc::new(
            ConfigurationContext::load(StaticSettingsSource(EngineSettings::default())).unwrap(),
        );
        let gate = PermissionGate::default();
        Session::new(
            Reactor::new(Arc::clone(&context), gate.clone()),
            AdminSurface::new(context, gate, "autofarm"),
            demo_world().unwrap(),
            player,
        )
    }

    fn lines(reply: Reply) -> Vec<String> {
        match reply {
            Reply::Lines(lines) => lines,
            Reply::Quit => Vec::new(),
        }
    }

    #[test]
    fn demo_world_has_mature_wheat_row() {
        let world = demo_world().unwrap();
        assert_eq!(
            world.cell(CellPosition::new(0, 64, 0)),
            Some(WorldCell::mature(ResourceKind::Wheat))
        );
        assert_eq!(world.cell_count(), 48);
    }

    #[test]
    fn click_on_mature_wheat_harvests() {
        let mut session = session(Actor::operator("Console"));
        let out = lines(session.handle(ConsoleCommand::Click(CellPosition::new(0, 64, 0))));
        assert_eq!(out.len(), 1);
        assert!(out.first().unwrap().starts_with("Harvested WHEAT at (0, 64, 0)"));
        assert_eq!(session.player().inventory().count_of(ItemKind::Wheat), 1);
        assert_eq!(
            session.world().cell(CellPosition::new(0, 64, 0)),
            Some(WorldCell::planted(ResourceKind::Wheat))
        );
    }

    #[test]
    fn punch_runs_host_default_break() {
        let mut session = session(Actor::operator("Console"));
        let pos = CellPosition::new(1, 64, 1);
        let out = lines(session.handle(ConsoleCommand::Punch(pos)));
        assert!(out.first().unwrap().starts_with("Broke (1, 64, 1), dropped CARROT x3"));
        assert_eq!(
            session.world().cell(pos),
            Some(WorldCell::planted(ResourceKind::Air))
        );
        assert_eq!(session.world().pickups_at(pos).count(), 1);
    }

    #[test]
    fn immature_click_reports_nothing() {
        let mut session = session(Actor::operator("Console"));
        let out = lines(session.handle(ConsoleCommand::Click(CellPosition::new(0, 64, 2))));
        assert_eq!(out, vec![String::from("Nothing to harvest at (0, 64, 2)")]);
    }

    #[test]
    fn admin_denial_is_marked_as_warning() {
        let mut session = session(Actor::new("Guest"));
        let out = lines(session.handle(ConsoleCommand::Admin(vec![String::from("reload")])));
        assert_eq!(
            out,
            vec![String::from("! You do not have permission to run this command!")]
        );
    }

    #[test]
    fn unknown_admin_subcommand_prints_usage() {
        let mut session = session(Actor::operator("Console"));
        let out = lines(session.handle(ConsoleCommand::Admin(vec![String::from("x")])));
        assert_eq!(out, vec![String::from("Usage: /autofarm [reload|info]")]);
    }

    #[test]
    fn completion_lists_offers() {
        let mut session = session(Actor::operator("Console"));
        let out = lines(session.handle(ConsoleCommand::Complete(vec![String::new()])));
        assert_eq!(out, vec![String::from("reload  info")]);
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut session = session(Actor::operator("Console"));
        assert_eq!(session.handle(ConsoleCommand::Quit), Reply::Quit);
    }
}
