use anyhow::Context;
use std::io::Read;
use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::thread;

fn new_command(path: impl AsRef<Path>, cmd: &str, args: &[&str]) -> Command {
    let mut command = Command::new(cmd);
    command.current_dir(path).args(args);

    #[cfg(target_os = "windows")]
    {
        use std::os::windows::process::CommandExt;
        const CREATE_NO_WINDOW: u32 = 0x08000000;
        command.creation_flags(CREATE_NO_WINDOW);
    }
    command
}

/// Error text of a failed process. Some git commands, `commit` among them,
/// explain the failure on stdout and leave stderr empty.
fn failure(stdout: String, stderr: String) -> anyhow::Error {
    match stderr.trim().is_empty() {
        true => anyhow::anyhow!(stdout),
        false => anyhow::anyhow!(stderr),
    }
}

pub fn exec_cmd(path: impl AsRef<Path>, cmd: &str, args: &[&str]) -> Result<String, anyhow::Error> {
    let mut command = new_command(path, cmd, args);

    let output = command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .with_context(|| format!("Error starting command: {:?}", command))?;

    let stdout = String::from_utf8(output.stdout)?;
    let stderr = String::from_utf8(output.stderr)?;

    match output.status.success() {
        true => Ok(stdout),
        false => Err(failure(stdout, stderr)),
    }
}

fn drain_stderr(child: &mut Child) -> thread::JoinHandle<String> {
    let stderr = child.stderr.take();
    thread::spawn(move || {
        let mut buf = String::new();
        if let Some(mut stderr) = stderr {
            let _ = stderr.read_to_string(&mut buf);
        }
        buf
    })
}

/// Run `cmd from_args | cmd into_args`, failing if either side exits non-zero.
pub fn exec_piped(
    path: impl AsRef<Path>,
    cmd: &str,
    from_args: &[&str],
    into_args: &[&str],
) -> Result<(), anyhow::Error> {
    let path = path.as_ref();

    let mut from = new_command(path, cmd, from_args);
    let mut producer = from
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .with_context(|| format!("Error starting command: {:?}", from))?;
    // read concurrently, a chatty producer must not block on a full pipe
    let producer_stderr = drain_stderr(&mut producer);

    let Some(pipe) = producer.stdout.take() else {
        let _ = producer.kill();
        let _ = producer.wait();
        return Err(anyhow::anyhow!("Error capturing stdout of {:?}", from));
    };

    let mut into = new_command(path, cmd, into_args);
    let consumer = match into
        .stdin(Stdio::from(pipe))
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
    {
        Ok(consumer) => consumer,
        Err(err) => {
            let _ = producer.kill();
            let _ = producer.wait();
            return Err(err).with_context(|| format!("Error starting command: {:?}", into));
        }
    };

    let consumer_output = consumer
        .wait_with_output()
        .context("Error waiting for process to finish")?;
    let producer_status = producer
        .wait()
        .context("Error waiting for process to finish")?;
    let producer_stderr = producer_stderr.join().unwrap_or_default();

    if !producer_status.success() {
        return Err(anyhow::anyhow!(producer_stderr));
    }
    if !consumer_output.status.success() {
        return Err(failure(
            String::from_utf8(consumer_output.stdout)?,
            String::from_utf8(consumer_output.stderr)?,
        ));
    }
    Ok(())
}
