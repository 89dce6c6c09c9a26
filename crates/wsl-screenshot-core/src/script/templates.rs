// PowerShell fragments assembled by the script builder.
// Caller values never appear here; they are bound to variables ahead of the
// fragment that reads them.

/// Output encoding, error mode and the native helpers every script needs
pub(crate) const PREAMBLE: &str = r#"$ErrorActionPreference = 'Stop'
$ProgressPreference = 'SilentlyContinue'
[Console]::OutputEncoding = [System.Text.Encoding]::UTF8

Add-Type -TypeDefinition @'
using System;
using System.Runtime.InteropServices;

public static class WslScreenshotNative
{
    [StructLayout(LayoutKind.Sequential)]
    public struct RECT
    {
        public int Left;
        public int Top;
        public int Right;
        public int Bottom;
    }

    [DllImport("user32.dll")]
    public static extern bool SetProcessDpiAwarenessContext(IntPtr value);

    [DllImport("shcore.dll")]
    public static extern int SetProcessDpiAwareness(int value);

    [DllImport("user32.dll")]
    public static extern bool SetProcessDPIAware();

    [DllImport("user32.dll")]
    public static extern bool GetWindowRect(IntPtr hWnd, out RECT rect);

    [DllImport("user32.dll")]
    public static extern bool SetForegroundWindow(IntPtr hWnd);

    [DllImport("user32.dll")]
    public static extern bool ShowWindow(IntPtr hWnd, int nCmdShow);

    [DllImport("user32.dll")]
    public static extern bool IsIconic(IntPtr hWnd);
}
'@
"#;

/// Physical-pixel coordinates: per-monitor v2, then per-monitor, then system aware
pub(crate) const DPI_AWARENESS: &str = r#"
$dpiAware = $false
try { $dpiAware = [WslScreenshotNative]::SetProcessDpiAwarenessContext([IntPtr]::new(-4)) } catch { $dpiAware = $false }
if (-not $dpiAware) {
    try { $dpiAware = ([WslScreenshotNative]::SetProcessDpiAwareness(2) -eq 0) } catch { $dpiAware = $false }
}
if (-not $dpiAware) {
    try { [void][WslScreenshotNative]::SetProcessDPIAware() } catch { }
}

Add-Type -AssemblyName System.Windows.Forms
Add-Type -AssemblyName System.Drawing
"#;

/// Visible top-level windows, in process enumeration order
pub(crate) const WINDOW_ENUMERATION: &str = r#"
$windows = @(
    Get-Process |
        Where-Object { $_.MainWindowHandle -ne [IntPtr]::Zero -and -not [string]::IsNullOrWhiteSpace($_.MainWindowTitle) } |
        ForEach-Object {
            [PSCustomObject]@{
                Title       = $_.MainWindowTitle
                ProcessName = $_.ProcessName
                Handle      = $_.MainWindowHandle
            }
        }
)

function Write-WindowList {
    Write-Output 'Available windows:'
    foreach ($window in $windows) {
        Write-Output ('  - {0} ({1})' -f $window.Title, $window.ProcessName)
    }
}
"#;

/// `Save-ScreenRegion` copies a screen rectangle into `$outputPath` as PNG
pub(crate) const SAVE_REGION: &str = r#"
function Save-ScreenRegion {
    param([int]$X, [int]$Y, [int]$Width, [int]$Height)

    if ($Width -le 0 -or $Height -le 0) {
        throw ('Capture region has invalid dimensions: {0}x{1}' -f $Width, $Height)
    }

    $bitmap = New-Object System.Drawing.Bitmap($Width, $Height)
    $graphics = [System.Drawing.Graphics]::FromImage($bitmap)
    try {
        $graphics.CopyFromScreen($X, $Y, 0, 0, $bitmap.Size)
        $bitmap.Save($outputPath, [System.Drawing.Imaging.ImageFormat]::Png)
    }
    finally {
        $graphics.Dispose()
        $bitmap.Dispose()
    }
}
"#;

/// Reads `$searchTerm`; leaves the candidates in `$matchingWindows`
pub(crate) const FIND_BY_TITLE: &str = r#"
$matchingWindows = @($windows | Where-Object { $_.Title.IndexOf($searchTerm, [System.StringComparison]::OrdinalIgnoreCase) -ge 0 })
if ($matchingWindows.Count -eq 0) {
    Write-WindowList
    throw ('No window found with title containing: {0}' -f $searchTerm)
}
"#;

/// Reads `$searchTerm`; leaves the candidates in `$matchingWindows`
pub(crate) const FIND_BY_PROCESS: &str = r#"
$matchingWindows = @($windows | Where-Object { $_.ProcessName.IndexOf($searchTerm, [System.StringComparison]::OrdinalIgnoreCase) -ge 0 })
if ($matchingWindows.Count -eq 0) {
    Write-WindowList
    throw ('No window found with process name containing: {0}' -f $searchTerm)
}
"#;

/// Reads `$matchingWindows`, `$padding` and `$settleMs`
pub(crate) const CAPTURE_WINDOW: &str = r#"
$target = $matchingWindows[0]
$handle = $target.Handle
if ([WslScreenshotNative]::IsIconic($handle)) {
    [void][WslScreenshotNative]::ShowWindow($handle, 9)
}
[void][WslScreenshotNative]::SetForegroundWindow($handle)
Start-Sleep -Milliseconds $settleMs

$rect = New-Object 'WslScreenshotNative+RECT'
if (-not [WslScreenshotNative]::GetWindowRect($handle, [ref]$rect)) {
    throw ("Failed to read window bounds for '{0}'" -f $target.Title)
}

$left = [Math]::Max(0, $rect.Left - $padding)
$top = [Math]::Max(0, $rect.Top - $padding)
$width = ($rect.Right + $padding) - $left
$height = ($rect.Bottom + $padding) - $top

Save-ScreenRegion -X $left -Y $top -Width $width -Height $height
Write-Output ("Captured window '{0}' ({1}) at {2}x{3} to {4}" -f $target.Title, $target.ProcessName, $width, $height, $outputPath)
"#;

/// Reads `$monitorSelector`
///
/// Numbered monitors count from 1 in order of their left edge, so the
/// numbering matches the physical left-to-right layout.
pub(crate) const CAPTURE_MONITOR: &str = r#"
if ($monitorSelector -ieq 'primary') {
    $screen = [System.Windows.Forms.Screen]::PrimaryScreen
    $monitorLabel = 'primary monitor'
}
else {
    $screens = @([System.Windows.Forms.Screen]::AllScreens | Sort-Object -Property { $_.Bounds.X })
    $monitorIndex = 0
    if (-not [int]::TryParse($monitorSelector, [ref]$monitorIndex)) {
        throw ("Invalid monitor selector '{0}'. Use 'all', 'primary', or a monitor number from 1 to {1}" -f $monitorSelector, $screens.Count)
    }
    if ($monitorIndex -lt 1 -or $monitorIndex -gt $screens.Count) {
        throw ('Monitor {0} not found. Valid range: 1 to {1}' -f $monitorIndex, $screens.Count)
    }
    $screen = $screens[$monitorIndex - 1]
    $monitorLabel = 'monitor {0}' -f $monitorIndex
}

$bounds = $screen.Bounds
Save-ScreenRegion -X $bounds.X -Y $bounds.Y -Width $bounds.Width -Height $bounds.Height
Write-Output ('Captured {0} at {1}x{2} to {3}' -f $monitorLabel, $bounds.Width, $bounds.Height, $outputPath)
"#;

/// Spans every monitor, including negative origins left of the primary
pub(crate) const CAPTURE_ALL_MONITORS: &str = r#"
$bounds = [System.Windows.Forms.SystemInformation]::VirtualScreen
Save-ScreenRegion -X $bounds.X -Y $bounds.Y -Width $bounds.Width -Height $bounds.Height
Write-Output ('Captured all monitors at {0}x{1} to {2}' -f $bounds.Width, $bounds.Height, $outputPath)
"#;

/// Emits the window list as a JSON array on a single line
pub(crate) const LIST_WINDOWS_JSON: &str = r#"
ConvertTo-Json -Compress -InputObject @($windows | Select-Object -Property Title, ProcessName)
"#;
