//! Test fixture helpers for MemPro exports
//!
//! Fixtures are written into a fresh `TempDir`; keep the returned `TempDir`
//! alive for as long as the path is used.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A realistic export touching every analysis
pub const SAMPLE_EXPORT: &str = r#"{
  "SessionName": "GameClient_2024",
  "TotalSnapshots": 4,
  "TotalAllocations": 15000,
  "TotalSize": 1000000,
  "LeakCount": 7,
  "LeakSize": 600000,
  "MemoryFragmentation": 85.5,
  "CallTrees": [
    {
      "FunctionName": "main",
      "FileName": "main.cpp",
      "LineNumber": 10,
      "AllocationCount": 15000,
      "TotalSize": 1000000,
      "SelfSize": 1000,
      "InclusiveSize": 1000000,
      "Children": [
        {
          "FunctionName": "World::Load",
          "FileName": "world.cpp",
          "LineNumber": 55,
          "AllocationCount": 900,
          "TotalSize": 400000,
          "SelfSize": 400000,
          "InclusiveSize": 400000,
          "Children": []
        }
      ]
    }
  ],
  "Functions": [
    {
      "FunctionName": "TextureCache::Load",
      "FileName": "texture_cache.cpp",
      "LineNumber": 120,
      "AllocationCount": 3,
      "TotalSize": 45000,
      "AverageSize": 15000.0,
      "MinSize": 4096,
      "MaxSize": 120000,
      "Percentage": 4.5
    },
    {
      "FunctionName": "StringPool::Intern",
      "FileName": "string_pool.cpp",
      "LineNumber": 33,
      "AllocationCount": 9000,
      "TotalSize": 288000,
      "AverageSize": 32.0,
      "MinSize": 8,
      "MaxSize": 256,
      "Percentage": 28.8
    },
    {
      "FunctionName": "AudioStream::Open",
      "FileName": "audio.cpp",
      "LineNumber": 71,
      "AllocationCount": 10,
      "TotalSize": 600000,
      "AverageSize": 60000.0,
      "MinSize": 60000,
      "MaxSize": 60000,
      "Percentage": 60.0
    }
  ],
  "Leaks": [
    {
      "FunctionName": "Unknown Function at 0x1234",
      "FileName": "",
      "LineNumber": 0,
      "LeakSize": 5000,
      "LeakCount": 1,
      "LeakScore": 0.2,
      "CallStack": "",
      "IsSuspect": false
    },
    {
      "FunctionName": "std::vector<Entity>::_Emplace_reallocate",
      "FileName": "vector",
      "LineNumber": 700,
      "LeakSize": 250000,
      "LeakCount": 2,
      "LeakScore": 0.95,
      "CallStack": "main > World::Load > std::vector<Entity>::_Emplace_reallocate",
      "IsSuspect": true
    },
    {
      "FunctionName": "main",
      "FileName": "main.cpp",
      "LineNumber": 42,
      "LeakSize": 70000,
      "LeakCount": 3,
      "LeakScore": 0.5,
      "CallStack": "main",
      "IsSuspect": false
    },
    {
      "FunctionName": "Network::Buffer",
      "FileName": "net.cpp",
      "LineNumber": 88,
      "LeakSize": 0,
      "LeakCount": 0,
      "LeakScore": 0.0,
      "CallStack": "",
      "IsSuspect": false
    },
    {
      "FunctionName": "Script::Compile",
      "FileName": "script.cpp",
      "LineNumber": 9,
      "LeakSize": 8000,
      "LeakCount": 150,
      "LeakScore": 0.4,
      "CallStack": "",
      "IsSuspect": false
    }
  ],
  "PageViews": [
    {
      "Address": 140737488355328,
      "State": "Committed",
      "Type": "Private",
      "Protection": 4,
      "StackId": 17,
      "Usage": 4096,
      "AllocationCount": 3,
      "TotalSize": 4096,
      "FunctionName": "World::Load",
      "CallStack": "main > World::Load"
    }
  ],
  "Types": [
    {
      "TypeName": "Entity",
      "AllocationCount": 1200,
      "TotalSize": 96000,
      "AverageSize": 80.0,
      "MinSize": 80,
      "MaxSize": 80,
      "Percentage": 9.6,
      "MostCommonFunction": "World::Spawn",
      "MostCommonFile": "world.cpp",
      "MostCommonLine": 140
    }
  ]
}"#;

/// An export with nothing to report
pub const QUIET_EXPORT: &str = r#"{
  "SessionName": "Idle",
  "TotalAllocations": 10,
  "TotalSize": 0,
  "LeakCount": 0,
  "LeakSize": 0,
  "MemoryFragmentation": 50.0
}"#;

/// Write `contents` as `export.json` in a new temp directory
pub fn write_export(contents: &str) -> anyhow::Result<(TempDir, PathBuf)> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("export.json");
    fs::write(&path, contents)?;
    Ok((temp_dir, path))
}

/// Write the sample export
pub fn sample_export() -> anyhow::Result<(TempDir, PathBuf)> {
    write_export(SAMPLE_EXPORT)
}
