use std::path::Path;

use crate::entry::LaunchTarget;

pub const BROWSER_CORE: &str = "FrogUI";
pub const UTILITY_CORE: &str = "js2000";

// console folder -> core name
const CONSOLE_CORES: &[(&str, &str)] = &[
    ("menu", "FrogUI"),
    ("gb", "Gambatte"),
    ("gbb", "TGBDual"),
    ("gbgb", "Gearboy"),
    ("dblcherrygb", "DoubleCherry-GB"),
    ("gba", "gpSP"),
    ("gbaf", "gpSP"),
    ("gbaff", "gpSP"),
    ("gbav", "VBA-Next"),
    ("mgba", "mGBA"),
    ("nes", "FCEUmm"),
    ("nesq", "QuickNES"),
    ("nest", "Nestopia"),
    ("snes", "Snes9x2005"),
    ("snes02", "Snes9x2002"),
    ("sega", "PicoDrive"),
    ("gg", "Gearsystem"),
    ("gpgx", "Genesis-Plus-GX"),
    ("pce", "Beetle-PCE-Fast"),
    ("pcesgx", "Beetle-SuperGrafx"),
    ("pcfx", "Beetle-PCFX"),
    ("ngpc", "RACE"),
    ("lnx", "Handy"),
    ("lnxb", "Beetle-Lynx"),
    ("wswan", "Beetle-WonderSwan"),
    ("wsv", "Potator"),
    ("pokem", "PokeMini"),
    ("vb", "Beetle-VB"),
    ("a26", "Stella2014"),
    ("a5200", "Atari5200"),
    ("a78", "ProSystem"),
    ("a800", "Atari800"),
    ("int", "FreeIntv"),
    ("col", "Gearcoleco"),
    ("msx", "BlueMSX"),
    ("spec", "Fuse"),
    ("zx81", "EightyOne"),
    ("thom", "Theodore"),
    ("vec", "VecX"),
    ("c64", "VICE-x64"),
    ("c64sc", "VICE-x64sc"),
    ("c64f", "Frodo"),
    ("c64fc", "Frodo"),
    ("vic20", "VICE-xvic"),
    ("amstradb", "CAP32"),
    ("amstrad", "CrocoDS"),
    ("bk", "BK-Emulator"),
    ("pc8800", "QUASI88"),
    ("xmil", "X-Millennium"),
    ("m2k", "MAME2000"),
    ("chip8", "JAXE"),
    ("fcf", "FreeChaF"),
    ("retro8", "Retro8"),
    ("vapor", "VaporSpec"),
    ("gong", "Gong"),
    ("outrun", "Cannonball"),
    ("wolf3d", "ECWolf"),
    ("prboom", "PrBoom"),
    ("doom", "PrBoom"),
    ("doom2", "PrBoom"),
    ("doom-plutonia", "PrBoom"),
    ("doom-tnt", "PrBoom"),
    ("flashback", "REminiscence"),
    ("xrick", "XRick"),
    ("gw", "Game-and-Watch"),
    ("cdg", "PocketCDG"),
    ("gme", "Game-Music-Emu"),
    ("fake08", "FAKE-08"),
    ("lowres-nx", "LowRes-NX"),
    ("jnb", "Jump-n-Bump"),
    ("cavestory", "NXEngine"),
    ("o2em", "O2EM"),
    ("quake", "TyrQuake"),
    ("arduboy", "Arduous"),
    ("js2000", "js2000"),
];

pub fn core_for_console(console: &str) -> Option<&'static str> {
    CONSOLE_CORES
        .iter()
        .find(|(folder, _)| *folder == console)
        .map(|(_, core)| *core)
}

// splits a file below the root into what the loader needs: the console
// folder it lives in, its directory relative to the root, and its name
pub fn launch_target(root: &Path, file: &Path) -> Option<LaunchTarget> {
    let relative = file.strip_prefix(root).ok()?;
    let file_name = relative.file_name()?.to_str()?;
    let directory = relative.parent()?;
    let console = directory.components().next()?.as_os_str().to_str()?;
    let directory = directory.to_str()?.replace('\\', "/");
    Some(LaunchTarget::new(console, file_name, directory))
}
