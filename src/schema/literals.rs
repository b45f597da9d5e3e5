//! Closed literal sets.
//!
//! Each enum here is both the permitted-literal list the validator checks
//! string values against and the typed field in [`crate::config::TsConfig`].
//! Literals are case-sensitive and spelled exactly as the compiler accepts
//! them, including a few irregular spellings in the library list.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Declares a string-literal enum with its literal table.
macro_rules! literal_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $lit:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $lit)] $variant ),+
        }

        impl $name {
            /// Every permitted literal, in declaration order.
            pub const LITERALS: &'static [&'static str] = &[$($lit),+];

            /// The literal spelling of this variant.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $lit ),+
                }
            }

            /// Exact, case-sensitive lookup.
            #[must_use]
            pub fn from_literal(literal: &str) -> Option<Self> {
                match literal {
                    $( $lit => Some(Self::$variant), )+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

literal_enum! {
    /// Module code generation (`compilerOptions.module`).
    pub enum ModuleKind {
        CommonJs => "CommonJS",
        Amd => "AMD",
        System => "System",
        Umd => "UMD",
        Es6 => "ES6",
        Es2015 => "ES2015",
        Es2020 => "ES2020",
        EsNext => "ESNext",
        None => "None",
        Es2022 => "ES2022",
        Node16 => "Node16",
        NodeNext => "NodeNext",
    }
}

literal_enum! {
    /// Module resolution strategy (`compilerOptions.moduleResolution`).
    pub enum ModuleResolution {
        Classic => "classic",
        Node => "node",
        Node16 => "node16",
        NodeNext => "nodenext",
        Bundler => "bundler",
    }
}

literal_enum! {
    /// How files are classified as modules (`compilerOptions.moduleDetection`).
    pub enum ModuleDetection {
        /// Default: import/export statements plus package `type` and JSX hints.
        Auto => "auto",
        /// Only import/export statements.
        Legacy => "legacy",
        /// Every non-declaration file is a module.
        Force => "force",
    }
}

literal_enum! {
    /// Language version level (`compilerOptions.target`).
    pub enum Target {
        Es3 => "ES3",
        Es5 => "ES5",
        Es6 => "ES6",
        Es2015 => "ES2015",
        Es2016 => "ES2016",
        Es2017 => "ES2017",
        Es2018 => "ES2018",
        Es2019 => "ES2019",
        Es2020 => "ES2020",
        Es2021 => "ES2021",
        Es2022 => "ES2022",
        Es2023 => "ES2023",
        EsNext => "ESNext",
    }
}

literal_enum! {
    /// JSX emit mode (`compilerOptions.jsx`).
    pub enum Jsx {
        Preserve => "preserve",
        React => "react",
        ReactJsx => "react-jsx",
        ReactJsxDev => "react-jsxdev",
        ReactNative => "react-native",
    }
}

literal_enum! {
    /// Bundled library declaration file (`compilerOptions.lib` element).
    pub enum Lib {
        Es5 => "ES5",
        Es6 => "ES6",
        Es2015 => "ES2015",
        Es2015Collection => "ES2015.Collection",
        Es2015Core => "ES2015.Core",
        Es2015Generator => "ES2015.Generator",
        Es2015Iterable => "ES2015.Iterable",
        Es2015Promise => "ES2015.Promise",
        Es2015Proxy => "ES2015.Proxy",
        Es2015Reflect => "ES2015.Reflect",
        Es2015SymbolWellKnown => "ES2015.Symbol.WellKnown",
        Es2015Symbol => "ES2015.Symbol",
        Es2016 => "ES2016",
        Es2016ArrayInclude => "ES2016.Array.Include",
        Es2017 => "ES2017",
        Es2017Intl => "ES2017.Intl",
        Es2017Object => "ES2017.Object",
        Es2017SharedMemory => "ES2017.SharedMemory",
        Es2017String => "ES2017.String",
        Es2017TypedArrays => "ES2017.TypedArrays",
        Es2018 => "ES2018",
        Es2018AsyncGenerator => "ES2018.AsyncGenerator",
        Es2018AsyncIterable => "ES2018.AsyncIterable",
        Es2018Intl => "ES2018.Intl",
        Es2018Promise => "ES2018.Promise",
        Es2018Regexp => "ES2018.Regexp",
        Es2019 => "ES2019",
        Es2019Array => "ES2019.Array",
        Es2019Intl => "ES2019.Intl",
        Es2019Object => "ES2019.Object",
        Es2019String => "ES2019.String",
        Es2019Symbol => "ES2019.Symbol",
        Es2020 => "ES2020",
        Es2020BigInt => "ES2020.BigInt",
        Es2020Promise => "ES2020.Promise",
        Es2020String => "ES2020.String",
        Es2020SymbolWellKnown => "ES2020.Symbol.WellKnown",
        EsNext => "ESNext",
        EsNextArray => "ESNext.Array",
        EsNextAsyncIterable => "ESNext.AsyncIterable",
        EsNextBigInt => "ESNext.BigInt",
        EsNextIntl => "ESNext.Intl",
        EsNextPromise => "ESNext.Promise",
        EsNextString => "ESNext.String",
        EsNextSymbol => "ESNext.Symbol",
        Dom => "DOM",
        DomIterable => "DOM.Iterable",
        ScriptHost => "ScriptHost",
        WebWorker => "WebWorker",
        WebWorkerImportScripts => "WebWorker.ImportScripts",
        WebWorkerIterable => "Webworker.Iterable",
        Es7 => "ES7",
        Es2021 => "ES2021",
        Es2020SharedMemory => "ES2020.SharedMemory",
        Es2020Intl => "ES2020.Intl",
        Es2021Promise => "ES2021.Promise",
        Es2021String => "ES2021.String",
        Es2021WeakRef => "ES2021.WeakRef",
        EsNextWeakRef => "ESNext.WeakRef",
        Es2021Intl => "es2021.intl",
        Es2022 => "ES2022",
        Es2022Array => "ES2022.Array",
        Es2022Error => "ES2022.Error",
        Es2022Intl => "ES2022.Intl",
        Es2022Object => "ES2022.Object",
        Es2022String => "ES2022.String",
    }
}

literal_enum! {
    /// File watching strategy (`watchOptions.watchFile`).
    pub enum WatchFileStrategy {
        /// Poll every file at a fixed interval.
        FixedPollingInterval => "fixedPollingInterval",
        /// Poll at a fixed interval, less often for rarely changing file types.
        PriorityPollingInterval => "priorityPollingInterval",
        /// Poll through a queue that checks quiet files less often.
        DynamicPriorityPolling => "dynamicPriorityPolling",
        /// Default: native file system events.
        UseFsEvents => "useFsEvents",
        /// Native events on each file's parent directory.
        UseFsEventsOnParentDirectory => "useFsEventsOnParentDirectory",
    }
}

literal_enum! {
    /// Directory watching strategy (`watchOptions.watchDirectory`).
    pub enum WatchDirectoryStrategy {
        FixedPollingInterval => "fixedPollingInterval",
        DynamicPriorityPolling => "dynamicPriorityPolling",
        /// Default: native file system events.
        UseFsEvents => "useFsEvents",
    }
}

literal_enum! {
    /// Polling fallback when native events are unavailable
    /// (`watchOptions.fallbackPolling`).
    pub enum FallbackPollingStrategy {
        FixedPollingInterval => "fixedPollingInterval",
        PriorityPollingInterval => "priorityPollingInterval",
        DynamicPriorityPolling => "dynamicPriorityPolling",
        /// Disable deferred watching on directories.
        SynchronousWatchDirectory => "synchronousWatchDirectory",
    }
}
