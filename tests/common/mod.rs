//! Shared test infrastructure for integration tests.
//!
//! A fixture is a temporary docs root with a `utils.txt`, a Sphinx `source/`
//! tree, and a fake `virgil` program whose help output is canned per utility.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

pub const CONF_PY: &str = "project = u'virgil'\n\
author = u'Virgil Security'\n\
\n\
man_pages = [\n    (master_doc, 'virgil', u'virgil Documentation',\n     [author], 1)\n]\n";

pub const KEYGEN_HELP: &str = "Synopsis:\n    virgil keygen [-o <file>] [-g <alg>]\n\n\
Options:\n    -o <file>  Private key. If omitted, stdout is used.\n    -g <alg>   Generate private key with given algorithm.\n\n\
DESCRIPTION:\n    Generates private key.\n\n\
EXAMPLES:\n\t1. Generate Elliptic 384-bits NIST Curve private key:\n\t\tvirgil keygen -g bp384r1\n";

pub const CARD_CREATE_HELP: &str = "Synopsis:\n    virgil card-create -k <file> -i <identity>\n\
Options:\n    -k <file>  Private key.\n\
DESCRIPTION:\n    Creates a Virgil Card\n    and publishes it.\n\
EXAMPLES:\n    virgil card-create -k alice.key -i alice\n";

/// Temporary docs root plus a fake program.
pub struct DocsFixture {
    dir: TempDir,
}

impl DocsFixture {
    pub fn new(utils: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let fixture = Self { dir };
        fixture.write("utils.txt", utils);
        fixture.write("source/conf.py", CONF_PY);
        fixture.write("help/keygen.txt", KEYGEN_HELP);
        fixture.write("help/card-create.txt", CARD_CREATE_HELP);
        fixture.write("bin/virgil", &fake_program_script(fixture.root()));
        let program = fixture.program();
        let mut perms = fs::metadata(&program).expect("stat program").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&program, perms).expect("chmod program");
        fixture
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn program(&self) -> PathBuf {
        self.root().join("bin/virgil")
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    pub fn write(&self, rel: &str, contents: &str) {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent directory");
        }
        fs::write(&path, contents.as_bytes()).expect("write fixture file");
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path(rel)).expect("read fixture file")
    }

    /// Run the binary with `args`, pointing it at this fixture.
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_vcli2sphinx"))
            .args(args)
            .arg("--root")
            .arg(self.root())
            .arg("--program")
            .arg(self.program())
            .env_remove("RUST_LOG")
            .output()
            .expect("run vcli2sphinx")
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn fake_program_script(root: &Path) -> String {
    let help_dir = root.join("help");
    format!(
        "#!/bin/sh\n\
         if [ \"$2\" != \"-h\" ]; then echo \"unexpected flag $2\" >&2; exit 2; fi\n\
         case \"$1\" in\n\
         \x20 keygen|card-create) cat \"{help}/$1.txt\" ;;\n\
         \x20 broken) echo \"virgil broken: usage unavailable\" ;;\n\
         \x20 failing) echo \"boom: utility crashed\" >&2; exit 3 ;;\n\
         \x20 *) echo \"unknown utility $1\" >&2; exit 1 ;;\n\
         esac\n",
        help = help_dir.display()
    )
}
