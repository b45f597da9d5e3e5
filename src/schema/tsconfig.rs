//! The built-in TypeScript project configuration table.
//!
//! Kinds are recorded exactly as the upstream type declarations state them,
//! even where the compiler itself accepts something else. Those rows carry a
//! note instead of a corrected kind.

use super::literals::{
    FallbackPollingStrategy, Jsx, Lib, ModuleDetection, ModuleKind, ModuleResolution, Target,
    WatchDirectoryStrategy, WatchFileStrategy,
};
use super::{DefaultValue, Group, GroupId, OptionSpec, ValueKind};

const fn flag(name: &'static str) -> OptionSpec {
    OptionSpec::new(name, ValueKind::Boolean)
}

const fn text(name: &'static str) -> OptionSpec {
    OptionSpec::new(name, ValueKind::String)
}

const fn list(name: &'static str) -> OptionSpec {
    OptionSpec::new(name, ValueKind::StringList)
}

const fn one_of(name: &'static str, literals: &'static [&'static str]) -> OptionSpec {
    OptionSpec::new(name, ValueKind::Enum(literals))
}

const ROOT: &[OptionSpec] = &[
    list("files"),
    OptionSpec::new("extends", ValueKind::StringOrList),
    list("include"),
    list("exclude"),
    OptionSpec::new("references", ValueKind::ObjectList(GroupId::Reference)),
    OptionSpec::new("watchOptions", ValueKind::Object(GroupId::WatchOptions)),
    OptionSpec::new(
        "compilerOptions",
        ValueKind::Object(GroupId::CompilerOptions),
    ),
    OptionSpec::new(
        "typeAcquisition",
        ValueKind::Object(GroupId::TypeAcquisition),
    ),
    OptionSpec::new("ts-node", ValueKind::Object(GroupId::TsNode)),
];

const COMPILER_OPTIONS: &[OptionSpec] = &[
    // Type checking
    flag("allowUnreachableCode"),
    flag("allowUnusedLabels"),
    flag("alwaysStrict"),
    flag("exactOptionalPropertyTypes"),
    flag("noFallthroughCasesInSwitch"),
    flag("noImplicitAny"),
    flag("noImplicitOverride"),
    flag("noImplicitReturns"),
    flag("noImplicitThis"),
    flag("noPropertyAccessFromIndexSignature"),
    flag("noUncheckedIndexedAccess"),
    flag("noUnusedLocals"),
    flag("noUnusedParameters"),
    flag("strict"),
    flag("strictBindCallApply"),
    flag("strictFunctionTypes"),
    flag("strictNullChecks"),
    flag("strictPropertyInitialization"),
    text("useUnknownInCatchVariables")
        .with_note("declared as a string; the compiler itself expects a boolean"),
    // Modules
    flag("allowArbitraryExtensions"),
    flag("allowImportingTsExtensions"),
    flag("allowUmdGlobalAccess"),
    text("baseUrl"),
    list("customConditions"),
    one_of("module", ModuleKind::LITERALS),
    one_of("moduleResolution", ModuleResolution::LITERALS),
    flag("moduleSuffixes")
        .with_note("declared as a boolean; the compiler itself expects a list of suffixes"),
    flag("noResolve"),
    OptionSpec::new("paths", ValueKind::Object(GroupId::PathMapping)),
    flag("resolveJsonModule"),
    flag("resolvePackageJsonExports"),
    flag("resolvePackageJsonImports"),
    text("rootDir"),
    list("rootDirs"),
    list("typeRoots"),
    list("types"),
    // Emit
    flag("declaration"),
    text("declarationDir"),
    flag("declarationMap"),
    flag("downlevelIteration"),
    flag("emitBOM"),
    flag("emitDeclarationOnly"),
    flag("importHelpers"),
    flag("importsNotUsedAsValues").with_note(
        "declared as a boolean; the compiler itself expects 'remove', 'preserve' or 'error'",
    ),
    flag("inlineSourceMap"),
    flag("inlineSources"),
    text("mapRoot"),
    flag("newLine")
        .with_note("declared as a boolean; the compiler itself expects 'crlf' or 'lf'"),
    flag("noEmit"),
    flag("noEmitHelpers"),
    flag("noEmitOnError"),
    text("outDir"),
    text("outFile"),
    flag("preserveConstEnums"),
    flag("preserveValueImports"),
    flag("removeComments"),
    flag("sourceMap"),
    text("sourceRoot"),
    flag("stripInternal"),
    // JavaScript support
    flag("allowJs"),
    flag("checkJs"),
    OptionSpec::new("maxNodeModuleJsDepth", ValueKind::Number),
    // Editor support
    flag("disableSizeLimit"),
    OptionSpec::new("plugins", ValueKind::ObjectList(GroupId::Plugin)),
    // Interop constraints
    flag("allowSyntheticDefaultImports"),
    flag("esModuleInterop"),
    flag("forceConsistentCasingInFileNames"),
    flag("isolatedModules"),
    flag("preserveSymlinks"),
    flag("verbatimModuleSyntax"),
    // Backwards compatibility
    text("charset"),
    flag("keyofStringsOnly"),
    flag("noImplicitUseStrict"),
    flag("noStrictGenericChecks"),
    flag("out").with_note("declared as a boolean; the compiler itself expects a file path"),
    flag("suppressExcessPropertyErrors"),
    flag("suppressImplicitAnyIndexErrors"),
    // Language and environment
    flag("emitDecoratorMetadata"),
    flag("experimentalDecorators"),
    one_of("jsx", Jsx::LITERALS),
    text("jsxFactory"),
    text("jsxFragmentFactory"),
    text("jsxImportSource"),
    OptionSpec::new("lib", ValueKind::EnumList(Lib::LITERALS)),
    one_of("moduleDetection", ModuleDetection::LITERALS)
        .with_default(DefaultValue::Str("auto")),
    flag("noLib"),
    text("reactNamespace"),
    one_of("target", Target::LITERALS),
    flag("useDefineForClassFields"),
    // Compiler diagnostics
    flag("diagnostics"),
    flag("explainFiles"),
    flag("extendedDiagnostics"),
    flag("generateCpuProfile"),
    flag("listEmittedFiles"),
    flag("listFiles"),
    flag("traceResolution"),
    // Projects
    flag("composite"),
    flag("disableReferencedProjectLoad"),
    flag("disableSolutionSearching"),
    flag("disableSourceOfProjectReferenceRedirect"),
    flag("incremental"),
    flag("tsBuildInfoFile")
        .with_note("declared as a boolean; the compiler itself expects a file path"),
    // Output formatting
    flag("noErrorTruncation"),
    flag("preserveWatchOutput"),
    flag("pretty"),
    // Completeness
    flag("skipDefaultLibCheck"),
    flag("skipLibCheck"),
    // Watch
    flag("assumeChangesOnlyAffectDirectDependencies"),
];

const PLUGIN: &[OptionSpec] = &[text("name").required()];

const REFERENCE: &[OptionSpec] = &[text("path").required()];

const WATCH_OPTIONS: &[OptionSpec] = &[
    one_of("watchFile", WatchFileStrategy::LITERALS)
        .with_default(DefaultValue::Str("useFsEvents")),
    one_of("watchDirectory", WatchDirectoryStrategy::LITERALS)
        .with_default(DefaultValue::Str("useFsEvents")),
    one_of("fallbackPolling", FallbackPollingStrategy::LITERALS),
    flag("synchronousWatchDirectory"),
    list("excludeDirectories"),
    list("excludeFiles"),
];

const TYPE_ACQUISITION: &[OptionSpec] = &[
    flag("enable"),
    list("include"),
    list("exclude"),
    flag("disableFilenameBasedTypeAcquisition"),
];

/// Every group of the table, root first.
pub(super) fn groups() -> Vec<Group> {
    vec![
        Group::new(GroupId::Root, ROOT),
        Group::new(GroupId::CompilerOptions, COMPILER_OPTIONS),
        Group::map_of(GroupId::PathMapping, ValueKind::StringList),
        Group::new(GroupId::Plugin, PLUGIN),
        Group::new(GroupId::Reference, REFERENCE),
        Group::new(GroupId::WatchOptions, WATCH_OPTIONS),
        Group::new(GroupId::TypeAcquisition, TYPE_ACQUISITION),
        Group::map_of(GroupId::TsNode, ValueKind::Any),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_defaults_are_members_of_their_literal_set() {
        for group in groups() {
            for option in &group.options {
                if let (ValueKind::Enum(literals), Some(DefaultValue::Str(value))) =
                    (option.kind, option.default)
                {
                    assert!(
                        literals.contains(&value),
                        "default '{value}' of {} is not a permitted literal",
                        option.name
                    );
                }
            }
        }
    }

    #[test]
    fn only_list_elements_have_required_fields() {
        for group in groups() {
            let has_required = group.options.iter().any(|o| o.required);
            assert_eq!(
                has_required,
                matches!(group.id, GroupId::Plugin | GroupId::Reference),
                "unexpected required fields in {}",
                group.id
            );
        }
    }

    #[test]
    fn compiler_options_cover_every_category() {
        let names: Vec<&str> = COMPILER_OPTIONS.iter().map(|o| o.name).collect();
        for expected in [
            "strict",
            "module",
            "paths",
            "declaration",
            "allowJs",
            "plugins",
            "esModuleInterop",
            "charset",
            "target",
            "diagnostics",
            "composite",
            "pretty",
            "skipLibCheck",
            "assumeChangesOnlyAffectDirectDependencies",
        ] {
            assert!(names.contains(&expected), "missing {expected}");
        }
    }
}
