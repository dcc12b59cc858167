use std::io::Write;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use classroom::{
    ClassSettings, ClassroomController, Registry, Transcript,
    common::{DeviceKind, DeviceState},
    devices::{AirConditioner, AttendanceScanner, LightsPanel, Projector},
};
use serde::Serialize;

#[derive(Parser)]
#[command(about = "Runs the classroom start and end procedures")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Leave a device out of the room (repeatable)
    #[arg(long, global = true, value_name = "DEVICE")]
    without: Vec<Device>,

    /// Projector input source
    #[arg(long, global = true, default_value = "HDMI-1")]
    input: String,

    /// Lights level, 0-100
    #[arg(long, global = true, default_value_t = 60)]
    brightness: u8,

    /// Air conditioner target in degrees Celsius
    #[arg(long, global = true, default_value_t = 24, allow_negative_numbers = true)]
    temperature: i32,

    /// Head count reported by the attendance scanner
    #[arg(long, global = true, default_value_t = 3)]
    present: u32,

    /// Print transcripts and device states as JSON
    #[arg(long, global = true)]
    json: bool,
}

impl Args {
    fn settings(&self) -> ClassSettings {
        ClassSettings {
            input: self.input.as_str().into(),
            brightness: self.brightness,
            temperature_c: self.temperature,
        }
    }
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Start of class followed by end of class
    Session,
    /// Start of class only
    Start,
    /// End of class only
    End,
    /// List the devices in the room and their capabilities
    Devices,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Device {
    Projector,
    #[value(alias = "lights_panel")]
    LightsPanel,
    #[value(alias = "air_conditioner")]
    AirConditioner,
    #[value(alias = "attendance_scanner")]
    AttendanceScanner,
}

impl From<Device> for DeviceKind {
    fn from(device: Device) -> Self {
        match device {
            Device::Projector => DeviceKind::Projector,
            Device::LightsPanel => DeviceKind::LightsPanel,
            Device::AirConditioner => DeviceKind::AirConditioner,
            Device::AttendanceScanner => DeviceKind::AttendanceScanner,
        }
    }
}

#[derive(Serialize)]
struct Report<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    start: Option<&'a Transcript>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end: Option<&'a Transcript>,
    devices: Vec<DeviceState>,
}

fn main() -> anyhow::Result<()> {
    classroom::log::init();

    let args = Args::parse();
    let registry = fit_room(&args);

    run(&args, &registry, &mut std::io::stdout().lock())
}

fn fit_room(args: &Args) -> Registry {
    let mut registry = Registry::new();

    for kind in DeviceKind::ALL {
        if args.without.iter().any(|&d| DeviceKind::from(d) == kind) {
            continue;
        }

        match kind {
            DeviceKind::Projector => {
                registry.add(Projector::new());
            }
            DeviceKind::LightsPanel => {
                registry.add(LightsPanel::new());
            }
            DeviceKind::AirConditioner => {
                registry.add(AirConditioner::new());
            }
            DeviceKind::AttendanceScanner => {
                registry.add(AttendanceScanner::new(args.present));
            }
        }
    }

    registry
}

fn run(args: &Args, registry: &Registry, out: &mut impl Write) -> anyhow::Result<()> {
    let controller = ClassroomController::with_settings(registry, args.settings());
    let command = args.command.unwrap_or(Command::Session);

    if command == Command::Devices {
        return list_devices(registry, out);
    }

    let mut start = None;
    let mut end = None;
    let result = run_procedures(command, &controller, !args.json, out, &mut start, &mut end);

    // the report goes out even on failure, with whatever steps were taken
    if args.json {
        let report = Report {
            start: start.as_ref(),
            end: end.as_ref(),
            devices: registry.devices().iter().map(|d| d.state()).collect(),
        };

        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    }

    result
}

fn run_procedures(
    command: Command,
    controller: &ClassroomController<'_>,
    echo: bool,
    out: &mut impl Write,
    start: &mut Option<Transcript>,
    end: &mut Option<Transcript>,
) -> anyhow::Result<()> {
    if matches!(command, Command::Session | Command::Start) {
        let transcript = start.insert(Transcript::default());

        if echo {
            writeln!(out, "Start of class:")?;
        }

        let result = controller.start_class_into(transcript);

        if echo {
            print_steps(transcript, out)?;
        }

        result.context("start-of-class procedure failed")?;

        if echo && let Some(present) = transcript.present() {
            writeln!(out, "Attendance scanned: present={present}")?;
        }
    }

    if matches!(command, Command::Session | Command::End) {
        let transcript = end.insert(Transcript::default());

        if echo {
            writeln!(out, "Shutdown sequence:")?;
        }

        let result = controller.end_class_into(transcript);

        if echo {
            print_steps(transcript, out)?;
        }

        result.context("end-of-class procedure failed")?;
    }

    Ok(())
}

fn print_steps(transcript: &Transcript, out: &mut impl Write) -> anyhow::Result<()> {
    for step in transcript.steps() {
        writeln!(out, "  {step}")?;
    }

    Ok(())
}

fn list_devices(registry: &Registry, out: &mut impl Write) -> anyhow::Result<()> {
    if registry.is_empty() {
        writeln!(out, "No devices")?;
        return Ok(());
    }

    for device in registry.devices() {
        let capabilities = device
            .capabilities()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        writeln!(out, "{}: {capabilities}", device.kind())?;
    }

    Ok(())
}
