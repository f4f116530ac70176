//! End-to-end flows through the CLI layer: build a throwaway project tree,
//! run a command, and check the written output byte for byte.

use std::fs;
use std::path::Path;

use indoc::indoc;
use pretty_assertions::assert_eq;
use tempfile::{TempDir, tempdir};

use langfix::cli::{Arguments, Command, CommonArgs, ExitStatus, RepairArgs, SyncArgs, UnusedArgs, run_cli};
use langfix::error::Error;

const LANG_FILE: &str = indoc! {r#"
    <ResourceDictionary xmlns="https://github.com/avaloniaui"
                        xmlns:x="http://schemas.microsoft.com/winfx/2006/xaml"
                        xmlns:sys="clr-namespace:System;assembly=System.Runtime">

        <!-- Window chrome -->
        <sys:String x:Key="AppTitle">My App</sys:String>
        <sys:String x:Key="OldPrompt">Click here</sys:String>
        <sys:String x:Key="LegalNotice">
            All rights reserved.
        </sys:String>
    </ResourceDictionary>
"#};

/// A project tree where `AppTitle` is referenced and the other two keys
/// are not.
fn project_with_lang_file() -> TempDir {
    let dir = tempdir().unwrap();
    let root = dir.path();

    fs::create_dir_all(root.join("Views")).unwrap();
    fs::write(
        root.join("Views/MainWindow.axaml"),
        "<Window Title=\"{DynamicResource AppTitle}\"/>\n",
    )
    .unwrap();

    fs::create_dir_all(root.join("Assets/Language")).unwrap();
    fs::write(root.join("Assets/Language/en.axaml"), LANG_FILE).unwrap();

    dir
}

fn common() -> CommonArgs {
    CommonArgs { verbose: false }
}

fn unused_args(root: &Path, lang_file: &str, fail_unused: bool) -> Arguments {
    Arguments {
        command: Command::Unused(UnusedArgs {
            root: root.to_path_buf(),
            lang_file: lang_file.into(),
            fail_unused,
            common: common(),
        }),
    }
}

fn repair_args(root: &Path, lang_file: &str, out_file: &Path) -> Arguments {
    Arguments {
        command: Command::Repair(RepairArgs {
            root: root.to_path_buf(),
            lang_file: lang_file.into(),
            out_file: out_file.to_path_buf(),
            common: common(),
        }),
    }
}

#[test]
fn unused_reports_success_without_fail_flag() {
    let dir = project_with_lang_file();
    let status = run_cli(unused_args(dir.path(), "Assets/Language/en.axaml", false)).unwrap();
    assert_eq!(status, ExitStatus::Success);
}

#[test]
fn unused_with_fail_flag_fails_when_keys_are_unused() {
    let dir = project_with_lang_file();
    let status = run_cli(unused_args(dir.path(), "Assets/Language/en.axaml", true)).unwrap();
    assert_eq!(status, ExitStatus::Failure);
}

#[test]
fn unused_with_fail_flag_passes_when_all_keys_are_used() {
    let dir = project_with_lang_file();
    // Reference the remaining two keys from code.
    fs::write(
        dir.path().join("Views/About.cs"),
        "var a = LangHelper.OldPrompt;\nvar b = LangHelper.LegalNotice;\n",
    )
    .unwrap();

    let status = run_cli(unused_args(dir.path(), "Assets/Language/en.axaml", true)).unwrap();
    assert_eq!(status, ExitStatus::Success);
}

#[test]
fn repair_comments_out_unused_entries() {
    let dir = project_with_lang_file();
    let out = dir.path().join("Assets/Language/en.repaired.axaml");

    let status = run_cli(repair_args(dir.path(), "Assets/Language/en.axaml", &out)).unwrap();
    assert_eq!(status, ExitStatus::Success);

    let expected = indoc! {r#"
        <ResourceDictionary xmlns="https://github.com/avaloniaui"
                            xmlns:x="http://schemas.microsoft.com/winfx/2006/xaml"
                            xmlns:sys="clr-namespace:System;assembly=System.Runtime">

            <!-- Window chrome -->
            <sys:String x:Key="AppTitle">My App</sys:String>
            <!-- <sys:String x:Key="OldPrompt">Click here</sys:String> -->
            <!-- <sys:String x:Key="LegalNotice">
                All rights reserved.
            </sys:String> -->
        </ResourceDictionary>
    "#};
    assert_eq!(fs::read_to_string(&out).unwrap(), expected);
}

#[test]
fn repairing_repaired_output_changes_nothing() {
    let dir = project_with_lang_file();
    let once = dir.path().join("Assets/Language/en.once.axaml");
    let twice = dir.path().join("Assets/Language/en.twice.axaml");

    run_cli(repair_args(dir.path(), "Assets/Language/en.axaml", &once)).unwrap();
    run_cli(repair_args(dir.path(), "Assets/Language/en.once.axaml", &twice)).unwrap();

    assert_eq!(
        fs::read_to_string(&once).unwrap(),
        fs::read_to_string(&twice).unwrap()
    );
}

#[test]
fn sync_merges_missing_entries_preferring_target() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("en.axaml");
    let target = dir.path().join("fr.axaml");
    let out = dir.path().join("fr.synced.axaml");

    fs::write(
        &source,
        indoc! {r#"
            <ResourceDictionary xmlns:x="http://schemas.microsoft.com/winfx/2006/xaml"
                                xmlns:sys="clr-namespace:System;assembly=System.Runtime">

                <!-- Greetings -->
                <sys:String x:Key="Hello">Hello</sys:String>
                <sys:String x:Key="Farewell">
                    Goodbye, friend.
                </sys:String>
            </ResourceDictionary>
        "#},
    )
    .unwrap();
    fs::write(
        &target,
        indoc! {r#"
            <ResourceDictionary xmlns:x="http://schemas.microsoft.com/winfx/2006/xaml"
                                xmlns:sys="clr-namespace:System;assembly=System.Runtime">
                <sys:String x:Key="Hello">Bonjour</sys:String>
            </ResourceDictionary>
        "#},
    )
    .unwrap();

    let status = run_cli(Arguments {
        command: Command::Sync(SyncArgs {
            source,
            target,
            out_file: out.clone(),
            common: common(),
        }),
    })
    .unwrap();
    assert_eq!(status, ExitStatus::Success);

    // Structural boilerplate is dropped by the sync walk; see DESIGN.md.
    let expected = concat!(
        "\n",
        "    <!-- Greetings -->\n",
        "    <sys:String x:Key=\"Hello\">Bonjour</sys:String>\n",
        "    <sys:String x:Key=\"Farewell\">\n",
        "        Goodbye, friend.\n",
        "    </sys:String>\n",
    );
    assert_eq!(fs::read_to_string(&out).unwrap(), expected);
}

#[test]
fn missing_lang_file_is_a_not_found_error() {
    let dir = tempdir().unwrap();
    let err = run_cli(unused_args(dir.path(), "nope.axaml", false)).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<Error>(),
        Some(Error::NotFound(_))
    ));
}

#[test]
fn lang_file_without_entries_is_an_empty_key_set_error() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("empty.axaml"),
        indoc! {r#"
            <ResourceDictionary xmlns:sys="clr-namespace:System;assembly=System.Runtime">
            </ResourceDictionary>
        "#},
    )
    .unwrap();

    let err = run_cli(unused_args(dir.path(), "empty.axaml", false)).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<Error>(),
        Some(Error::EmptyKeySet)
    ));
}
