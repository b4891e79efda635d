use sysinfo::System;
use sysmon_core::MemoryReading;

const MEMINFO: &str = "/proc/meminfo";

/// Build a [`MemoryReading`] from a `System` with refreshed memory.
///
/// sysinfo does not expose page cache or buffers, so those come from
/// `/proc/meminfo` and read as zero when it is unavailable.
pub fn read(sys: &System) -> MemoryReading {
    let (cached, buffers) = std::fs::read_to_string(MEMINFO)
        .map(|raw| parse_cache_and_buffers(&raw))
        .unwrap_or((0, 0));

    MemoryReading {
        total:     sys.total_memory(),
        used:      sys.used_memory(),
        available: sys.available_memory(),
        cached,
        buffers,
    }
}

/// `(cached, buffers)` in bytes. Cached includes reclaimable slab, matching
/// what `free` reports as cache.
pub fn parse_cache_and_buffers(meminfo: &str) -> (u64, u64) {
    let field = |name: &str| -> u64 {
        meminfo
            .lines()
            .filter_map(|l| l.split_once(':'))
            .find(|(key, _)| key.trim() == name)
            .and_then(|(_, rest)| rest.split_whitespace().next())
            .and_then(|kb| kb.parse::<u64>().ok())
            .map_or(0, |kb| kb * 1024)
    };
    (field("Cached") + field("SReclaimable"), field("Buffers"))
}
