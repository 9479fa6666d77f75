//! Macros for ergonomic automaton construction.

/// Build a `Vec<TransitionFunction>` from `source, symbol => target` entries.
///
/// Entries keep their written order, which is also the wiring order.
///
/// # Example
///
/// ```
/// use finite_automaton::core::StateArena;
/// use finite_automaton::transitions;
///
/// let mut states = StateArena::new();
/// let s0 = states.add("0");
/// let s1 = states.add("1");
///
/// let delta = transitions![
///     s0, '0' => s0;
///     s0, '1' => s1;
///     s1, '0' => s1;
///     s1, '1' => s0;
/// ];
///
/// assert_eq!(delta.len(), 4);
/// assert_eq!(delta[1].target(), s1);
/// ```
#[macro_export]
macro_rules! transitions {
    () => {
        ::std::vec::Vec::<$crate::core::TransitionFunction>::new()
    };
    (
        $($source:expr, $symbol:expr => $target:expr);+ $(;)?
    ) => {
        vec![
            $($crate::core::TransitionFunction::new($source, $symbol, $target)),+
        ]
    };
}
