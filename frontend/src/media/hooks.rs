use std::rc::Rc;

use log::{debug, error};
use yew::prelude::*;

use crate::media::error::MediaError;
use crate::media::observer::{MediaEnvironment, Subscription};
use crate::media::variant::VariantSelector;

/// A broken condition literal is a bug at the call site: loud in debug
/// builds, default variant in release builds.
fn report_descriptor_error(err: &MediaError) {
    error!("{}: {err}", err.as_label());
    if cfg!(debug_assertions) {
        panic!("{err}");
    }
}

/// The environment provided by the nearest `ContextProvider<MediaEnvironment>`.
///
/// Without a provider every component gets a private, never attached
/// environment and sees only the provisional `false`.
#[hook]
pub fn use_media_environment() -> MediaEnvironment {
    let fallback = use_memo(|_| MediaEnvironment::new(), ());
    use_context::<MediaEnvironment>().unwrap_or_else(|| (*fallback).clone())
}

/// Observes `condition`, logging a broken descriptor instead of returning it.
fn observe_reporting<F>(
    env: &MediaEnvironment,
    condition: &str,
    on_change: F,
) -> Option<Subscription>
where
    F: Fn(bool) + 'static,
{
    match env.observe(condition, on_change) {
        Ok(subscription) => Some(subscription),
        Err(err) => {
            report_descriptor_error(&err);
            None
        }
    }
}

/// Observes every condition, reporting changes as `(index, matches)`.
///
/// Returns the initial states aligned with `conditions` together with the
/// live subscriptions. A condition that fails to parse stays `false` and
/// does not keep the others from subscribing.
fn subscribe_all<F>(
    env: &MediaEnvironment,
    conditions: &[&str],
    on_change: F,
) -> (Vec<bool>, Vec<Subscription>)
where
    F: Fn(usize, bool) + Clone + 'static,
{
    let mut initial = Vec::with_capacity(conditions.len());
    let mut subscriptions = Vec::with_capacity(conditions.len());
    for (index, condition) in conditions.iter().enumerate() {
        let on_change = on_change.clone();
        match env.observe(condition, move |matches| on_change(index, matches)) {
            Ok(subscription) => {
                initial.push(subscription.matches());
                subscriptions.push(subscription);
            }
            Err(err) => {
                debug!("not observing `{condition}`: {err}");
                initial.push(false);
            }
        }
    }
    (initial, subscriptions)
}

/// Selector over rule positions, so it can be built once per set of
/// conditions while the variants themselves change freely.
type RuleSelector = Result<VariantSelector<Option<usize>>, MediaError>;

fn rule_selector(conditions: &[&str]) -> RuleSelector {
    let rules = conditions
        .iter()
        .enumerate()
        .map(|(index, condition)| (*condition, Some(index)));
    VariantSelector::from_rules(rules, None)
}

/// The chosen variant, or `default` when nothing holds or the rules are broken.
fn pick_variant<V: Clone>(
    selector: &RuleSelector,
    states: &[bool],
    rules: &[(&'static str, V)],
    default: V,
) -> V {
    let chosen = match selector {
        Ok(selector) => *selector.select_with(states),
        Err(_) => None,
    };
    chosen
        .and_then(|index| rules.get(index))
        .map_or(default, |(_, variant)| variant.clone())
}

/// Tracks whether `condition` currently holds.
///
/// Reports `false` until the app attaches its matching facility, then
/// re-renders the component on every change. The subscription is released
/// when the component unmounts or `condition` changes.
#[hook]
pub fn use_media_query(condition: &'static str) -> bool {
    let env = use_media_environment();
    let matches = {
        let env = env.clone();
        use_state_eq(move || env.current(condition).unwrap_or(false))
    };

    {
        let matches = matches.clone();
        use_effect_with_deps(
            move |(env, condition): &(MediaEnvironment, &'static str)| {
                let setter = matches.setter();
                let subscription = observe_reporting(env, condition, move |value| setter.set(value));
                if let Some(subscription) = &subscription {
                    matches.set(subscription.matches());
                }
                move || drop(subscription)
            },
            (env, condition),
        );
    }

    *matches
}

#[derive(Debug, PartialEq)]
struct MatchStates(Vec<bool>);

enum MatchAction {
    Set { index: usize, matches: bool },
    Reset(Vec<bool>),
}

impl Reducible for MatchStates {
    type Action = MatchAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            MatchAction::Set { index, matches } => {
                let mut states = self.0.clone();
                if let Some(slot) = states.get_mut(index) {
                    *slot = matches;
                }
                Rc::new(MatchStates(states))
            }
            MatchAction::Reset(states) => Rc::new(MatchStates(states)),
        }
    }
}

/// Picks the first variant whose condition holds, in the order given,
/// falling back to `default`.
///
/// ```ignore
/// let headline = use_variant(
///     vec![(IPHONE_XR, Headline::Device), (MOBILE, Headline::Short)],
///     Headline::Full,
/// );
/// ```
#[hook]
pub fn use_variant<V>(rules: Vec<(&'static str, V)>, default: V) -> V
where
    V: Clone + 'static,
{
    let env = use_media_environment();
    let conditions: Vec<&'static str> = rules.iter().map(|(condition, _)| *condition).collect();

    let selector = use_memo(
        |conditions: &Vec<&'static str>| {
            let selector = rule_selector(conditions);
            if let Err(err) = &selector {
                report_descriptor_error(err);
            }
            selector
        },
        conditions.clone(),
    );

    let states = {
        let env = env.clone();
        let conditions = conditions.clone();
        use_reducer_eq(move || {
            MatchStates(
                conditions
                    .iter()
                    .map(|condition| env.current(condition).unwrap_or(false))
                    .collect(),
            )
        })
    };

    {
        let dispatcher = states.dispatcher();
        use_effect_with_deps(
            move |(env, conditions): &(MediaEnvironment, Vec<&'static str>)| {
                let on_change = {
                    let dispatcher = dispatcher.clone();
                    move |index: usize, matches: bool| {
                        dispatcher.dispatch(MatchAction::Set { index, matches })
                    }
                };
                let (initial, subscriptions) = subscribe_all(env, conditions, on_change);
                dispatcher.dispatch(MatchAction::Reset(initial));
                move || drop(subscriptions)
            },
            (env, conditions),
        );
    }

    pick_variant(&selector, &states.0, &rules, default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use crate::media::simulated::SimulatedFacility;

    const MOBILE: &str = "(max-width: 640px)";
    const DESKTOP: &str = "(min-width: 769px)";

    fn attached(width: f64) -> (Rc<SimulatedFacility>, MediaEnvironment) {
        let facility = Rc::new(SimulatedFacility::with_size(width, 800.0));
        let env = MediaEnvironment::with_facility(facility.clone());
        (facility, env)
    }

    #[test]
    fn test_match_states_reducer() {
        let states = Rc::new(MatchStates(vec![false, false]));
        let states = states.reduce(MatchAction::Set { index: 1, matches: true });
        assert_eq!(*states, MatchStates(vec![false, true]));

        // Out of range updates are ignored.
        let states = states.reduce(MatchAction::Set { index: 5, matches: true });
        assert_eq!(*states, MatchStates(vec![false, true]));

        let states = states.reduce(MatchAction::Reset(vec![true, false]));
        assert_eq!(*states, MatchStates(vec![true, false]));
    }

    #[test]
    fn test_subscribe_all_one_subscription_per_condition() {
        let (facility, env) = attached(1024.0);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let on_change = {
            let seen = seen.clone();
            move |index: usize, matches: bool| seen.borrow_mut().push((index, matches))
        };

        let (initial, subscriptions) = subscribe_all(&env, &[MOBILE, DESKTOP], on_change);
        assert_eq!(initial, vec![false, true]);
        assert_eq!(subscriptions.len(), 2);
        assert_eq!(env.subscription_count(), 2);
        assert_eq!(facility.listener_count(), 2);

        facility.resize(500.0, 800.0);
        assert_eq!(*seen.borrow(), vec![(0, true), (1, false)]);

        drop(subscriptions);
        assert_eq!(env.subscription_count(), 0);
        assert_eq!(facility.listener_count(), 0);
    }

    #[test]
    fn test_subscribe_all_skips_broken_condition() {
        let (facility, env) = attached(500.0);
        let (initial, subscriptions) =
            subscribe_all(&env, &[DESKTOP, "(max-width: wide)", MOBILE], |_, _| {});
        assert_eq!(initial, vec![false, false, true]);
        assert_eq!(subscriptions.len(), 2);
        assert_eq!(facility.listener_count(), 2);
    }

    #[test]
    fn test_resubscribe_on_new_conditions_releases_old() {
        let (facility, env) = attached(500.0);
        let (_, first) = subscribe_all(&env, &[MOBILE, DESKTOP], |_, _| {});
        assert_eq!(facility.listener_count(), 2);

        // Effect teardown then re-run with the new dependency.
        drop(first);
        let (initial, second) = subscribe_all(&env, &[DESKTOP], |_, _| {});
        assert_eq!(initial, vec![false]);
        assert_eq!(second.len(), 1);
        assert_eq!(env.subscription_count(), 1);
    }

    #[test]
    fn test_subscribe_all_before_attach_corrects_by_index() {
        let env = MediaEnvironment::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let on_change = {
            let seen = seen.clone();
            move |index: usize, matches: bool| seen.borrow_mut().push((index, matches))
        };
        let (initial, _subscriptions) = subscribe_all(&env, &[DESKTOP, MOBILE], on_change);
        assert_eq!(initial, vec![false, false]);

        env.attach(Rc::new(SimulatedFacility::with_size(500.0, 800.0)));
        assert_eq!(*seen.borrow(), vec![(1, true)]);
    }

    #[test]
    fn test_observe_reporting_releases_on_drop() {
        let (facility, env) = attached(1024.0);
        let hits = Rc::new(RefCell::new(Vec::new()));
        let subscription = {
            let hits = hits.clone();
            observe_reporting(&env, MOBILE, move |matches| hits.borrow_mut().push(matches))
        };
        assert!(subscription.as_ref().is_some_and(|s| !s.matches()));
        assert_eq!(facility.listener_count(), 1);

        facility.resize(500.0, 800.0);
        assert_eq!(*hits.borrow(), vec![true]);

        drop(subscription);
        assert_eq!(facility.listener_count(), 0);
        facility.resize(1024.0, 800.0);
        assert_eq!(*hits.borrow(), vec![true]);
    }

    #[test]
    fn test_pick_variant_by_priority() {
        let rules = [(MOBILE, "short"), (DESKTOP, "wide")];
        let selector = rule_selector(&[MOBILE, DESKTOP]);
        assert_eq!(pick_variant(&selector, &[true, true], &rules, "medium"), "short");
        assert_eq!(pick_variant(&selector, &[false, true], &rules, "medium"), "wide");
        assert_eq!(pick_variant(&selector, &[false, false], &rules, "medium"), "medium");
        // States not yet known count as no match.
        assert_eq!(pick_variant(&selector, &[], &rules, "medium"), "medium");
    }

    #[test]
    fn test_pick_variant_falls_back_on_broken_rules() {
        let rules = [(MOBILE, "short"), ("(max-width)", "broken")];
        let selector = rule_selector(&[MOBILE, "(max-width)"]);
        assert!(selector.is_err());
        assert_eq!(pick_variant(&selector, &[true, true], &rules, "full"), "full");
    }
}
