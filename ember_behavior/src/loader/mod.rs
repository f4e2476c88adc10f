//! Scene loader - JSON entity and rule definitions, as produced by the rule editor.
//!
//! Entities are referred to by scene-local names; names are resolved to
//! [`Entity`] ids when the scene is instantiated into a [`World`].

mod defs;

pub use defs::*;

use ember_core::{Entity, World};
use std::collections::{HashMap, HashSet};

use crate::actions::{AddTag, DebugLog, DestroyEntity, EmitEvent, RemoveTag, SetVelocity, SpawnEntity};
use crate::behavior::{Action, Condition, Rule, Trigger};
use crate::conditions::{AlwaysTrue, HasTag, IsAlive, Not, PayloadEquals, TagCountAtLeast};
use crate::error::{LoadError, Result};
use crate::events::Event;

/// A scene instantiated into a world: named entities plus compiled rules.
#[derive(Debug, Default)]
pub struct Scene {
    /// Scene-local name -> spawned entity.
    pub entities: HashMap<String, Entity>,

    /// Rules in definition order, ready for a dispatcher.
    pub rules: Vec<Rule>,
}

impl Scene {
    /// Parse a scene and instantiate it into `world`.
    pub fn load(json: &str, world: &mut World) -> Result<Self> {
        SceneDef::from_json(json)?.instantiate(world)
    }

    /// Entity spawned for a scene-local name.
    pub fn entity(&self, name: &str) -> Option<Entity> {
        self.entities.get(name).copied()
    }
}

impl SceneDef {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Spawn every entity, attach its components, then compile the rules.
    ///
    /// Names are checked before anything is spawned, so a failed load leaves
    /// `world` untouched.
    pub fn instantiate(&self, world: &mut World) -> Result<Scene> {
        self.validate()?;

        let mut entities = HashMap::new();
        for def in &self.entities {
            let entity = world.spawn(&def.tags);
            if let Some(position) = def.position {
                world.insert(entity, position);
            }
            if let Some(velocity) = def.velocity {
                world.insert(entity, velocity);
            }
            if let Some(display) = def.display {
                world.insert(entity, display);
            }
            if let Some(name) = &def.name {
                entities.insert(name.clone(), entity);
            }
        }

        let resolver = Resolver { names: &entities };
        let rules = self
            .rules
            .iter()
            .map(|def| resolver.rule(def))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(entities = self.entities.len(), rules = rules.len(), "scene loaded");
        Ok(Scene { entities, rules })
    }

    fn validate(&self) -> Result<()> {
        let mut names = HashSet::new();
        for def in &self.entities {
            if let Some(name) = &def.name {
                if !names.insert(name.as_str()) {
                    return Err(LoadError::DuplicateEntity(name.clone()));
                }
            }
        }

        let known = |name: &String| {
            if names.contains(name.as_str()) {
                Ok(())
            } else {
                Err(LoadError::UnknownEntity(name.clone()))
            }
        };
        for rule in &self.rules {
            rule.referenced_names().try_for_each(&known)?;
        }
        Ok(())
    }
}

/// Turns definitions into runtime values once every name has an entity.
struct Resolver<'a> {
    names: &'a HashMap<String, Entity>,
}

impl Resolver<'_> {
    fn entity(&self, name: &str) -> Result<Entity> {
        self.names
            .get(name)
            .copied()
            .ok_or_else(|| LoadError::UnknownEntity(name.to_string()))
    }

    fn rule(&self, def: &RuleDef) -> Result<Rule> {
        let mut trigger = Trigger::new(def.trigger.event.clone());
        for name in &def.trigger.entities {
            trigger = trigger.with_entity(self.entity(name)?);
        }

        let mut rule = Rule::new(trigger);
        if let Some(name) = &def.name {
            rule = rule.named(name.clone());
        }
        for condition in &def.conditions {
            rule = rule.with_boxed_condition(condition_from_def(condition));
        }
        for action in &def.actions {
            rule = rule.with_boxed_action(self.action(action)?);
        }
        Ok(rule)
    }

    fn action(&self, def: &ActionDef) -> Result<Box<dyn Action>> {
        let action: Box<dyn Action> = match def {
            ActionDef::DebugLog { message } => Box::new(DebugLog::new(message.clone())),
            ActionDef::Emit { event } => Box::new(EmitEvent::new(self.event(event)?)),
            ActionDef::AddTag { who, tag } => Box::new(AddTag::new(*who, tag.clone())),
            ActionDef::RemoveTag { who, tag } => Box::new(RemoveTag::new(*who, tag.clone())),
            ActionDef::Destroy { who } => Box::new(DestroyEntity(*who)),
            ActionDef::Spawn { tags } => Box::new(SpawnEntity::new(tags.iter().cloned())),
            ActionDef::SetVelocity { who, x, y } => Box::new(SetVelocity::new(*who, *x, *y)),
        };
        Ok(action)
    }

    fn event(&self, def: &EventDef) -> Result<Event> {
        let mut event = Event::new(def.event_type.clone());
        if let Some(name) = &def.a {
            event = event.with_a(self.entity(name)?);
        }
        if let Some(name) = &def.b {
            event = event.with_b(self.entity(name)?);
        }
        event.payload = def.payload.clone();
        Ok(event)
    }
}

fn condition_from_def(def: &ConditionDef) -> Box<dyn Condition> {
    match def {
        ConditionDef::AlwaysTrue => Box::new(AlwaysTrue),
        ConditionDef::IsAlive { who } => Box::new(IsAlive(*who)),
        ConditionDef::HasTag { who, tag } => Box::new(HasTag::new(*who, tag.clone())),
        ConditionDef::TagCountAtLeast { tag, min } => {
            Box::new(TagCountAtLeast::new(tag.clone(), *min))
        }
        ConditionDef::PayloadEquals { key, value } => {
            Box::new(PayloadEquals::new(key.clone(), value.clone()))
        }
        ConditionDef::Not { condition } => Box::new(Not(condition_from_def(condition))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behavior::Simulation;
    use ember_core::{Position, Velocity};

    const SCENE: &str = r#"{
        "entities": [
            { "name": "player", "tags": ["player"], "position": { "x": 300, "y": 220 } },
            { "name": "grunt", "tags": ["enemy"],
              "position": { "x": 80, "y": 50 }, "velocity": { "x": 1, "y": 2 } }
        ],
        "rules": [
            {
                "name": "player hit",
                "trigger": { "event": "collision", "entities": ["player"] },
                "conditions": [
                    { "type": "has_tag", "who": "b", "tag": "enemy" },
                    { "type": "not", "condition": { "type": "has_tag", "who": "a", "tag": "shielded" } }
                ],
                "actions": [
                    { "type": "destroy", "who": "b" },
                    { "type": "emit", "event": { "type": "score", "a": "player", "payload": { "points": 10 } } }
                ]
            }
        ]
    }"#;

    #[test]
    fn test_load_scene() {
        let mut world = World::new();
        let scene = Scene::load(SCENE, &mut world).expect("scene loads");

        let player = scene.entity("player").expect("player spawned");
        let grunt = scene.entity("grunt").expect("grunt spawned");

        assert!(world.tags().has_tag(player, "player"));
        assert_eq!(world.get_live::<Position>(player), Some(&Position::new(300.0, 220.0)));
        assert_eq!(world.get_live::<Velocity>(grunt), Some(&Velocity::new(1.0, 2.0)));
        assert_eq!(scene.rules.len(), 1);
        assert_eq!(scene.rules[0].trigger.entities, vec![player]);
        assert_eq!(scene.rules[0].conditions.len(), 2);
        assert_eq!(scene.rules[0].actions.len(), 2);
    }

    #[test]
    fn test_loaded_rules_run() {
        let mut world = World::new();
        let scene = Scene::load(SCENE, &mut world).expect("scene loads");
        let player = scene.entity("player").expect("player spawned");
        let grunt = scene.entity("grunt").expect("grunt spawned");
        let mut sim = Simulation::new(world, scene.rules);

        sim.emit(Event::new("collision").with_a(player).with_b(grunt));
        let summary = sim.step();

        assert_eq!(summary.rules_fired, 1);
        assert!(!sim.world.is_alive(grunt));
        assert!(sim.world.tags().entities_with_tag("enemy").is_empty());
        let pending = sim.dispatcher().pending();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].a, Some(player));
        assert_eq!(pending[0].get_i64("points"), Some(10));
    }

    #[test]
    fn test_unknown_entity_leaves_world_untouched() {
        let json = r#"{
            "entities": [ { "name": "player", "tags": ["player"] } ],
            "rules": [ { "trigger": { "event": "collision", "entities": ["ghost"] } } ]
        }"#;
        let mut world = World::new();

        let err = Scene::load(json, &mut world).expect_err("ghost is unknown");

        assert!(matches!(err, LoadError::UnknownEntity(name) if name == "ghost"));
        assert_eq!(world.registry.count(), 0);
    }

    #[test]
    fn test_duplicate_entity_name() {
        let json = r#"{ "entities": [ { "name": "boss" }, { "name": "boss" } ] }"#;
        let mut world = World::new();

        let err = Scene::load(json, &mut world).expect_err("duplicate name");

        assert!(matches!(err, LoadError::DuplicateEntity(name) if name == "boss"));
    }

    #[test]
    fn test_invalid_json() {
        let mut world = World::new();
        let err = Scene::load(r#"{ "rules": [ { "trigger": 5 } ] }"#, &mut world)
            .expect_err("bad trigger");
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn test_empty_scene() {
        let mut world = World::new();
        let scene = Scene::load("{}", &mut world).expect("empty scene loads");
        assert!(scene.rules.is_empty());
        assert!(scene.entities.is_empty());
    }
}
