use anyhow::{Result, bail};
use std::io::{self, BufRead, IsTerminal};
use zeroize::Zeroizing;

/// Resolves the password for a CLI command.
///
/// Order: `--password` flag, then one line of piped stdin, then an
/// interactive prompt.
pub fn read_password(flag: Option<String>) -> Result<Zeroizing<String>> {
    if let Some(pw) = flag {
        return Ok(Zeroizing::new(pw));
    }

    //  stdin (Pipeline)
    //  echo "supersecret" | saltpass encode
    if !io::stdin().is_terminal() {
        let mut buf = Zeroizing::new(String::new());
        io::stdin().lock().read_line(&mut buf)?;
        trim_newline(&mut buf);

        if buf.is_empty() {
            bail!("password cannot be empty");
        }
        return Ok(buf);
    }

    let pw = Zeroizing::new(rpassword::prompt_password("Password: ")?);
    if pw.is_empty() {
        bail!("password cannot be empty");
    }
    Ok(pw)
}

fn trim_newline(s: &mut String) {
    while s.ends_with('\n') || s.ends_with('\r') {
        s.pop();
    }
}
