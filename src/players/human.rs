use super::*;
use dialoguer::Select;
use rand::rngs::SmallRng;

/// Terminal player. Lists the children of the current position and
/// reads a selection; Esc or `q` walks away from the game.
#[derive(Debug)]
pub struct Human {
    settings: Settings,
    rng: SmallRng,
}

impl From<Settings> for Human {
    fn from(settings: Settings) -> Self {
        Self {
            rng: settings.rng(),
            settings,
        }
    }
}

impl Player for Human {
    fn decide(&mut self, tree: &mut Tree, at: NodeIndex) -> Option<NodeIndex> {
        let children = tree.expand(at).to_vec();
        let shown = self.settings.arrange(&children, &mut self.rng);
        let labels = shown
            .iter()
            .map(|&child| tree.describe(child, &self.settings).to_string())
            .collect::<Vec<_>>();
        Self::selection(&labels).map(|i| shown[i])
    }
}

impl Human {
    fn selection(labels: &[String]) -> Option<usize> {
        Select::new()
            .with_prompt("What is your choice?")
            .report(false)
            .items(labels)
            .default(0)
            .interact_opt()
            .ok()
            .flatten()
    }
}
