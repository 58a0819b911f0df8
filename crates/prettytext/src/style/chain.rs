use std::borrow::Cow;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use rustc_hash::FxHashMap;
use smallvec::{smallvec, SmallVec};

use super::capability::{resolve_capability, ColorMode, EnvironmentSnapshot};
use super::{apply_style, compose_styles};
use crate::escape::{with_style_catalog, AnsiPair, StyleCode};

/// The style codes of a chain, in order of naming.
type Codes = SmallVec<[StyleCode; 4]>;

/// The shared node of a chain.
#[derive(Debug)]
struct ChainNode {
    codes: Codes,
}

/// A styler for terminal output.
///
/// A styler determines whether to style text when it is created and never
/// changes its mind afterwards. If enabled, its methods apply styles. If
/// disabled, they return their input unchanged. Stylers are `Send` and
/// `Sync`, so one styler can be shared by all threads of a program. The
/// [`styler`] function returns such a shared instance for the current
/// process.
///
/// A styler's methods named after catalog entries, e.g., [`Styler::bold`],
/// return a [`Chain`] for that one style, whose methods named after catalog
/// entries in turn return longer chains. The styler keeps every chain ever
/// built, so building the same chain again is a lookup.
#[derive(Debug)]
pub struct Styler {
    enabled: bool,
    /// The chains of length one, indexed by style code.
    roots: Vec<Arc<ChainNode>>,
    /// The longer chains.
    memo: RwLock<FxHashMap<Codes, Arc<ChainNode>>>,
}

impl Styler {
    fn create(enabled: bool) -> Self {
        let roots = StyleCode::all()
            .map(|code| Arc::new(ChainNode { codes: smallvec![code] }))
            .collect();

        Self {
            enabled,
            roots,
            memo: RwLock::new(FxHashMap::default()),
        }
    }

    /// Create a new styler for the current process.
    ///
    /// If the mode is [`ColorMode::Auto`], this method inspects the process
    /// environment with [`EnvironmentSnapshot::capture`].
    pub fn new(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Auto => Self::with_environment(mode, &EnvironmentSnapshot::capture()),
            _ => Self::create(resolve_capability(mode, None)),
        }
    }

    /// Create a new styler for the given environment.
    pub fn with_environment(mode: ColorMode, env: &EnvironmentSnapshot) -> Self {
        Self::create(resolve_capability(mode, Some(env)))
    }

    /// Create a new styler that is enabled or disabled as given.
    pub fn enabled(enabled: bool) -> Self {
        Self::create(enabled)
    }

    /// Determine whether this styler styles text.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Start a chain with the given style.
    pub fn style(&self, code: StyleCode) -> Chain<'_> {
        Chain {
            styler: self,
            node: Arc::clone(&self.roots[code as usize]),
        }
    }

    /// Style the text with the given style.
    pub fn paint<'t>(&self, code: StyleCode, text: &'t str) -> Cow<'t, str> {
        self.apply(text, code.pair())
    }

    /// Style the text with an arbitrary pair, e.g., one created with
    /// [`compose_styles`].
    pub fn apply<'t>(&self, text: &'t str, pair: &AnsiPair) -> Cow<'t, str> {
        if self.enabled {
            Cow::Owned(apply_style(text, pair))
        } else {
            Cow::Borrowed(text)
        }
    }

    /// Look up the chain node for the codes, creating it if necessary.
    fn intern(&self, codes: Codes) -> Arc<ChainNode> {
        {
            let memo = self.memo.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(node) = memo.get(&codes) {
                return Arc::clone(node);
            }
        }

        let mut memo = self.memo.write().unwrap_or_else(PoisonError::into_inner);
        let size = memo.len();
        let node = Arc::clone(
            memo.entry(codes)
                .or_insert_with_key(|codes| Arc::new(ChainNode { codes: codes.clone() })),
        );
        if size < memo.len() {
            tracing::trace!(codes = ?node.codes, chains = size + 1, "memoized style chain");
        }
        node
    }

    #[cfg(test)]
    fn memo_len(&self) -> usize {
        self.memo.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl Default for Styler {
    /// Create a new styler for the current process in automatic mode.
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

// ------------------------------------------------------------------------------------------------

/// An ordered sequence of styles bound to a styler.
///
/// Chains are cheap handles. Extending a chain with [`Chain::then`] or one of
/// the methods named after catalog entries returns the styler's memoized
/// chain for the extended sequence.
#[derive(Clone)]
pub struct Chain<'s> {
    styler: &'s Styler,
    node: Arc<ChainNode>,
}

impl<'s> Chain<'s> {
    /// Extend this chain with the given style.
    #[must_use]
    pub fn then(&self, code: StyleCode) -> Chain<'s> {
        let mut codes = self.node.codes.clone();
        codes.push(code);

        Chain {
            styler: self.styler,
            node: self.styler.intern(codes),
        }
    }

    /// Get this chain's styles in order of naming.
    pub fn codes(&self) -> &[StyleCode] {
        &self.node.codes
    }

    /// Combine this chain's styles into one pair.
    pub fn to_pair(&self) -> AnsiPair {
        let pairs: SmallVec<[&AnsiPair; 4]> = self.codes().iter().map(StyleCode::pair).collect();
        compose_styles(&pairs)
    }

    /// Determine whether the two chains share the same node.
    pub fn is_same(&self, other: &Chain<'_>) -> bool {
        Arc::ptr_eq(&self.node, &other.node)
    }

    /// Style the text with this chain's styles.
    ///
    /// The styles are applied from last to first, so that the first-named
    /// style ends up outermost. If the styler is disabled, this method returns
    /// the text unchanged.
    pub fn paint<'t>(&self, text: &'t str) -> Cow<'t, str> {
        if !self.styler.enabled || text.is_empty() {
            return Cow::Borrowed(text);
        }

        let mut codes = self.node.codes.iter().rev();
        let Some(innermost) = codes.next() else {
            return Cow::Borrowed(text);
        };
        let styled = codes.fold(apply_style(text, innermost.pair()), |styled, code| {
            apply_style(&styled, code.pair())
        });
        Cow::Owned(styled)
    }
}

impl core::fmt::Debug for Chain<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Chain")
            .field("codes", &self.node.codes)
            .field("enabled", &self.styler.enabled)
            .finish()
    }
}

macro_rules! define_chain_methods {
    ( $( ($variant:ident, $name:ident, $constant:ident, $open:literal, $close:literal) ),+ $(,)? ) => {
        impl Styler {
            $(
                #[doc = concat!("Start a chain with the `", stringify!($name), "` style.")]
                pub fn $name(&self) -> Chain<'_> {
                    self.style(StyleCode::$variant)
                }
            )+
        }

        impl<'s> Chain<'s> {
            $(
                #[doc = concat!("Extend this chain with the `", stringify!($name), "` style.")]
                #[must_use]
                pub fn $name(&self) -> Chain<'s> {
                    self.then(StyleCode::$variant)
                }
            )+
        }
    };
}

with_style_catalog!(define_chain_methods);

// ------------------------------------------------------------------------------------------------

/// Get the process-wide default styler.
///
/// The styler is created on first use in [`ColorMode::Auto`] from the
/// process environment. It does not change afterwards, even if the
/// environment does.
pub fn styler() -> &'static Styler {
    static DEFAULT: OnceLock<Styler> = OnceLock::new();
    DEFAULT.get_or_init(|| {
        let styler = Styler::new(ColorMode::Auto);
        tracing::debug!(enabled = styler.enabled, "created default styler");
        styler
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::escape::{BOLD, RED};

    #[test]
    fn test_styler_is_shareable() {
        fn is_send_sync<T: Send + Sync>() {}
        is_send_sync::<Styler>();
        is_send_sync::<Chain<'static>>();
    }

    #[test]
    fn test_construction() {
        assert!(Styler::enabled(true).is_enabled());
        assert!(!Styler::enabled(false).is_enabled());
        assert!(Styler::new(ColorMode::Always).is_enabled());
        assert!(!Styler::new(ColorMode::Never).is_enabled());

        let tty = EnvironmentSnapshot::new(true, false);
        let no_color = EnvironmentSnapshot::new(true, true);
        assert!(Styler::with_environment(ColorMode::Auto, &tty).is_enabled());
        assert!(!Styler::with_environment(ColorMode::Auto, &no_color).is_enabled());
        assert!(Styler::with_environment(ColorMode::Always, &no_color).is_enabled());
    }

    #[test]
    fn test_paint() {
        let styler = Styler::enabled(true);
        assert_eq!(styler.paint(StyleCode::Bold, "hi"), "\x1b[1mhi\x1b[22m");
        assert_eq!(styler.bold().paint("hi"), "\x1b[1mhi\x1b[22m");
        assert_eq!(styler.apply("hi", &RED), "\x1b[31mhi\x1b[39m");
        assert_eq!(styler.bold().paint(""), "");

        assert_eq!(
            styler.bold().underline().bg_blue().paint("x"),
            "\x1b[1m\x1b[4m\x1b[44mx\x1b[49m\x1b[24m\x1b[22m"
        );

        // Nested styles with the same close sequence.
        assert_eq!(
            styler.bold().dim().paint("x"),
            "\x1b[1m\x1b[2mx\x1b[22m\x1b[1m\x1b[22m"
        );
    }

    #[test]
    fn test_disabled() {
        let styler = Styler::enabled(false);
        assert!(matches!(styler.paint(StyleCode::Red, "hi"), Cow::Borrowed("hi")));
        assert!(matches!(styler.apply("hi", &BOLD), Cow::Borrowed("hi")));
        assert!(matches!(styler.red().bold().paint("hi"), Cow::Borrowed("hi")));
    }

    #[test]
    fn test_memo() {
        let styler = Styler::enabled(true);
        assert_eq!(styler.memo_len(), 0);

        let first = styler.bold().red();
        let second = styler.style(StyleCode::Bold).then(StyleCode::Red);
        assert!(first.is_same(&second));
        assert_eq!(styler.memo_len(), 1);

        let reversed = styler.red().bold();
        assert!(!first.is_same(&reversed));
        assert_eq!(reversed.codes(), &[StyleCode::Red, StyleCode::Bold]);
        assert_eq!(styler.memo_len(), 2);

        assert!(styler.bold().is_same(&styler.bold()));
        assert_eq!(styler.memo_len(), 2);
    }

    #[test]
    fn test_to_pair() {
        let styler = Styler::enabled(true);
        let pair = styler.bold().red().to_pair();
        assert_eq!(pair.open(), "\x1b[1m\x1b[31m");
        assert_eq!(pair.close(), "\x1b[39m\x1b[22m");
    }

    #[test]
    fn test_default_styler() {
        let first = styler();
        let second = styler();
        assert!(core::ptr::eq(first, second));
        assert!(first.bold().is_same(&second.bold()));
    }
}
